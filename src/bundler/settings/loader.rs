//! File extension to loader mapping.

use crate::bundler::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// How esbuild interprets a file kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Loader {
    Js,
    Jsx,
    Ts,
    Tsx,
    Css,
    Json,
    Text,
    Base64,
    DataUrl,
    File,
    Binary,
    Empty,
}

impl Loader {
    /// Name as esbuild spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            Loader::Js => "js",
            Loader::Jsx => "jsx",
            Loader::Ts => "ts",
            Loader::Tsx => "tsx",
            Loader::Css => "css",
            Loader::Json => "json",
            Loader::Text => "text",
            Loader::Base64 => "base64",
            Loader::DataUrl => "dataurl",
            Loader::File => "file",
            Loader::Binary => "binary",
            Loader::Empty => "empty",
        }
    }

    const ALL: [Loader; 12] = [
        Loader::Js,
        Loader::Jsx,
        Loader::Ts,
        Loader::Tsx,
        Loader::Css,
        Loader::Json,
        Loader::Text,
        Loader::Base64,
        Loader::DataUrl,
        Loader::File,
        Loader::Binary,
        Loader::Empty,
    ];
}

impl fmt::Display for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Loader {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Loader::ALL
            .into_iter()
            .find(|loader| loader.as_str() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Loader::ALL.iter().map(|l| l.as_str()).collect();
                format!("unknown loader `{s}` (expected one of: {})", known.join(", "))
            })
    }
}

/// Ordered extension → loader table handed to the engine.
///
/// The default covers markup-embedded script (`.tsx`, `.jsx`), plain script
/// (`.ts`, `.js`), stylesheets (`.css`) and data (`.json`). Entries can be replaced
/// or added; extensions must start with a dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderMap {
    entries: BTreeMap<String, Loader>,
}

impl Default for LoaderMap {
    fn default() -> Self {
        let entries = [
            (".tsx", Loader::Tsx),
            (".ts", Loader::Ts),
            (".jsx", Loader::Jsx),
            (".js", Loader::Js),
            (".css", Loader::Css),
            (".json", Loader::Json),
        ]
        .into_iter()
        .map(|(ext, loader)| (ext.to_string(), loader))
        .collect();

        Self { entries }
    }
}

impl LoaderMap {
    /// Sets the loader for an extension, replacing any previous mapping.
    pub fn insert(&mut self, extension: &str, loader: Loader) -> Result<()> {
        let extension = normalize_extension(extension).map_err(|reason| Error::InvalidLoader {
            spec: format!("{extension}={loader}"),
            reason,
        })?;
        self.entries.insert(extension, loader);
        Ok(())
    }

    /// Applies `extension = "loader"` pairs, as read from the project file.
    pub fn extend_from_names<'a, I>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (extension, name) in pairs {
            let loader = name.parse::<Loader>().map_err(|reason| Error::InvalidLoader {
                spec: format!("{extension}={name}"),
                reason,
            })?;
            self.insert(extension, loader)?;
        }
        Ok(())
    }

    /// Returns the loader for an extension, if mapped.
    pub fn get(&self, extension: &str) -> Option<Loader> {
        self.entries.get(extension).copied()
    }

    /// Iterates mappings in extension order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Loader)> {
        self.entries.iter().map(|(ext, loader)| (ext.as_str(), *loader))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_extension(extension: &str) -> std::result::Result<String, String> {
    let extension = extension.trim();
    let rest = extension
        .strip_prefix('.')
        .ok_or_else(|| format!("extension `{extension}` must start with '.'"))?;
    if rest.is_empty() || rest.contains(['=', '/', '\\']) || rest.contains(char::is_whitespace) {
        return Err(format!("`{extension}` is not a file extension"));
    }
    Ok(extension.to_ascii_lowercase())
}

/// Parses a `.ext=loader` override as given on the command line.
pub fn parse_loader_override(spec: &str) -> std::result::Result<(String, Loader), String> {
    let (extension, name) = spec
        .split_once('=')
        .ok_or_else(|| format!("expected `.ext=loader`, got `{spec}`"))?;
    let loader = name.parse::<Loader>()?;
    let extension = normalize_extension(extension)?;
    Ok((extension, loader))
}

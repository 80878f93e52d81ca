//! Engine options derived from a build configuration.

use super::banner::render_banner;
use crate::bundler::settings::{BuildConfiguration, EXTERNALS, ExternalGlobal, LoaderMap};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Language baseline of emitted code. No feature detection or polyfills are injected.
pub const TARGET: &str = "es2020";

/// Runtime the artifact is loaded into.
pub const PLATFORM: &str = "browser";

/// Output module format. Only a self-invoking function is produced.
pub const FORMAT: &str = "iife";

/// Words that cannot name a global `var`, or name one the page already relies on.
const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "Infinity", "instanceof", "interface",
    "let", "NaN", "new", "null", "package", "private", "protected", "public", "return", "static",
    "super", "switch", "this", "throw", "true", "try", "typeof", "undefined", "var", "void",
    "while", "with", "yield",
];

/// Derives the global the bundle's exports are assigned to.
///
/// Characters that cannot appear in a JavaScript identifier become `_`, so
/// `my-form` yields `my_form`. A leading digit or a reserved word gets a `_` prefix.
pub fn global_identifier(artifact_name: &str) -> String {
    let mut ident: String = artifact_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if ident.is_empty()
        || ident.starts_with(|c: char| c.is_ascii_digit())
        || RESERVED_WORDS.contains(&ident.as_str())
    {
        ident.insert(0, '_');
    }
    ident
}

/// Everything the engine is told about one build.
///
/// Built deterministically from a [`BuildConfiguration`]; two descriptors from the
/// same configuration, loader table and timestamp are identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleDescriptor {
    pub entry_point: PathBuf,
    pub outfile: PathBuf,
    pub global_name: String,
    pub minify: bool,
    pub sourcemap: bool,
    pub externals: Vec<ExternalGlobal>,
    pub banner: String,
    pub loaders: LoaderMap,
}

impl BundleDescriptor {
    /// Derives the descriptor for `config`, stamping the banner with `built_at`.
    pub fn new(config: &BuildConfiguration, loaders: &LoaderMap, built_at: &str) -> Self {
        Self {
            entry_point: config.entry_point().to_path_buf(),
            outfile: config.output_path().to_path_buf(),
            global_name: global_identifier(config.artifact_name()),
            minify: true,
            sourcemap: true,
            externals: EXTERNALS.to_vec(),
            banner: render_banner(config.artifact_name(), built_at, &EXTERNALS),
            loaders: loaders.clone(),
        }
    }

    /// Redirects output, keeping every other option.
    pub fn with_outfile(mut self, outfile: impl AsRef<Path>) -> Self {
        self.outfile = outfile.as_ref().to_path_buf();
        self
    }

    /// Renders the descriptor as esbuild command-line arguments.
    pub fn to_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            self.entry_point.clone().into_os_string(),
            "--bundle".into(),
            format!("--format={FORMAT}").into(),
            format!("--global-name={}", self.global_name).into(),
            format!("--platform={PLATFORM}").into(),
            format!("--target={TARGET}").into(),
        ];

        if self.minify {
            args.push("--minify".into());
        }
        if self.sourcemap {
            args.push("--sourcemap".into());
        }

        for external in &self.externals {
            args.push(format!("--external:{}", external.package).into());
        }

        args.push(format!("--banner:js={}", self.banner).into());

        for (extension, loader) in self.loaders.iter() {
            args.push(format!("--loader:{extension}={loader}").into());
        }

        let mut outfile = OsString::from("--outfile=");
        outfile.push(&self.outfile);
        args.push(outfile);

        args.push("--log-level=warning".into());
        args.push("--color=false".into());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::settings::SettingsBuilder;

    const BUILT_AT: &str = "2026-10-19T08:30:00.000Z";

    fn args_of(descriptor: &BundleDescriptor) -> Vec<String> {
        descriptor
            .to_args()
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn hyphens_become_underscores() {
        assert_eq!(global_identifier("my-form"), "my_form");
        assert_eq!(global_identifier("a-b-c-d"), "a_b_c_d");
        assert_eq!(global_identifier("custom-form"), "custom_form");
    }

    #[test]
    fn identifier_only_changes_invalid_characters() {
        let name = "Survey-2026-v3";
        let ident = global_identifier(name);
        assert!(!ident.contains('-'));
        assert_eq!(ident.len(), name.len());
        for (original, mapped) in name.chars().zip(ident.chars()) {
            if original == '-' {
                assert_eq!(mapped, '_');
            } else {
                assert_eq!(mapped, original);
            }
        }
    }

    #[test]
    fn other_punctuation_and_leading_digits_are_normalized() {
        assert_eq!(global_identifier("form.v2 beta"), "form_v2_beta");
        assert_eq!(global_identifier("2fa-form"), "_2fa_form");
        assert_eq!(global_identifier(""), "_");
    }

    #[test]
    fn reserved_words_are_prefixed() {
        for word in ["delete", "class", "new", "default", "undefined"] {
            assert_eq!(global_identifier(word), format!("_{word}"));
        }
        assert_eq!(global_identifier("delete-form"), "delete_form");
        assert_eq!(global_identifier("Class"), "Class");
    }

    #[test]
    fn descriptor_carries_fixed_options() {
        let config = SettingsBuilder::from_positional(["src/a.tsx", "dist/x.js", "my-form"]).build();
        let descriptor = BundleDescriptor::new(&config, &LoaderMap::default(), BUILT_AT);
        let args = args_of(&descriptor);

        assert_eq!(args[0], "src/a.tsx");
        for expected in [
            "--bundle",
            "--format=iife",
            "--global-name=my_form",
            "--platform=browser",
            "--target=es2020",
            "--minify",
            "--sourcemap",
            "--external:react",
            "--external:react-dom",
            "--loader:.tsx=tsx",
            "--loader:.css=css",
            "--outfile=dist/x.js",
        ] {
            assert!(args.iter().any(|a| a == expected), "missing {expected}: {args:?}");
        }

        let banner = args
            .iter()
            .find_map(|a| a.strip_prefix("--banner:js="))
            .unwrap();
        assert!(banner.starts_with("// Form: my-form\n// Built: 2026-10-19T08:30:00.000Z\n"));
    }

    #[test]
    fn custom_loaders_are_passed_through() {
        let config = SettingsBuilder::new().build();
        let mut loaders = LoaderMap::default();
        loaders
            .insert(".svg", crate::bundler::settings::Loader::DataUrl)
            .unwrap();
        let args = args_of(&BundleDescriptor::new(&config, &loaders, BUILT_AT));
        assert!(args.iter().any(|a| a == "--loader:.svg=dataurl"));
    }

    #[test]
    fn with_outfile_only_moves_output() {
        let config = SettingsBuilder::new().build();
        let base = BundleDescriptor::new(&config, &LoaderMap::default(), BUILT_AT);
        let moved = base.clone().with_outfile("dist/.stage/form.js");
        assert_eq!(moved.outfile, PathBuf::from("dist/.stage/form.js"));
        assert_eq!(moved.banner, base.banner);
        assert_eq!(moved.global_name, base.global_name);
    }

    #[test]
    fn derivation_is_deterministic() {
        let config = SettingsBuilder::new().build();
        let a = BundleDescriptor::new(&config, &LoaderMap::default(), BUILT_AT);
        let b = BundleDescriptor::new(&config, &LoaderMap::default(), BUILT_AT);
        assert_eq!(a, b);
        assert_eq!(a.to_args(), b.to_args());
    }
}

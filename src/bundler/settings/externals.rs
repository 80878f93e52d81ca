//! Packages left out of the bundle and bound to host globals instead.

/// An externalized package and the global the host page exposes it as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalGlobal {
    /// Import specifier as written in form source
    pub package: &'static str,
    /// Global binding supplied by the host page
    pub global: &'static str,
    /// Whether `<package>/jsx-runtime` and `<package>/jsx-dev-runtime` are served
    /// from this global's `createElement`
    pub jsx_runtime: bool,
}

/// The shared rendering runtime. Order is significant: it is the order of the
/// manifest's `externals` list.
///
/// esbuild treats each package as a prefix, so subpath imports such as
/// `react-dom/client` stay external too and resolve to the same global.
///
/// The host page must define every `global` before an artifact is evaluated.
pub const EXTERNALS: [ExternalGlobal; 2] = [
    ExternalGlobal {
        package: "react",
        global: "React",
        jsx_runtime: true,
    },
    ExternalGlobal {
        package: "react-dom",
        global: "ReactDOM",
        jsx_runtime: false,
    },
];

/// Package names of [`EXTERNALS`], in order.
pub fn external_package_names() -> Vec<String> {
    EXTERNALS.iter().map(|e| e.package.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_names_keep_declared_order() {
        assert_eq!(external_package_names(), vec!["react", "react-dom"]);
    }
}

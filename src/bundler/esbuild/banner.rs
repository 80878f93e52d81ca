//! Artifact prologue.
//!
//! The engine emits `iife` output in which every import of an externalized package
//! becomes a call to a global `require`. The prologue runs before the bundle and
//! makes those calls resolve against the globals the host page has already set up,
//! so the form shares the host's rendering runtime instance instead of shipping its own.

use crate::bundler::settings::ExternalGlobal;

/// Renders the prologue prepended to every artifact.
///
/// The first two lines are comments naming the form and build time so a deployed
/// artifact can be identified by reading it.
pub fn render_banner(artifact_name: &str, built_at: &str, externals: &[ExternalGlobal]) -> String {
    let mut lines = vec![
        format!("// Form: {}", single_line(artifact_name)),
        format!("// Built: {built_at}"),
    ];

    for external in externals {
        lines.push(format!(
            "var {global}=globalThis[\"{global}\"];",
            global = external.global
        ));
    }

    lines.push(require_shim(externals));
    lines.join("\n")
}

/// A `require` that answers for the externalized packages and their subpaths, and
/// defers to any `require` the host already defines for everything else.
///
/// `<package>/jsx-runtime` is adapted onto the package global's `createElement`,
/// since host globals only expose the classic API.
fn require_shim(externals: &[ExternalGlobal]) -> String {
    let host = externals
        .iter()
        .map(|e| format!("\"{}\":{}", e.package, e.global))
        .collect::<Vec<_>>()
        .join(",");

    let runtime = externals
        .iter()
        .filter(|e| e.jsx_runtime)
        .flat_map(|e| {
            ["jsx-runtime", "jsx-dev-runtime"]
                .map(|entry| format!("\"{}/{entry}\":\"{}\"", e.package, e.package))
        })
        .collect::<Vec<_>>()
        .join(",");

    let mut shim = String::from("var require=(function(prev){");
    shim.push_str(SHIM_HELPERS);
    shim.push_str(&format!("var host={{{host}}};var runtime={{{runtime}}};"));
    shim.push_str(SHIM_RESOLVE);
    shim.push_str("})(typeof require===\"function\"?require:void 0);");
    shim
}

const SHIM_HELPERS: &str = "\
var has=function(o,k){return Object.prototype.hasOwnProperty.call(o,k)};\
var jsx=function(R,spread){return function(type,props,key){\
var p={},n,c;props=props||{};\
for(n in props)if(has(props,n)&&n!==\"children\")p[n]=props[n];\
if(key!==void 0)p.key=key;\
c=props.children;\
if(c===void 0)return R.createElement(type,p);\
if(spread&&Array.isArray(c))return R.createElement.apply(R,[type,p].concat(c));\
return R.createElement(type,p,c)}};";

const SHIM_RESOLVE: &str = "\
return function(id){\
if(has(host,id))return host[id];\
if(has(runtime,id)){var R=host[runtime[id]];\
return{Fragment:R.Fragment,jsx:jsx(R,false),jsxs:jsx(R,true),jsxDEV:jsx(R,false)}}\
for(var k in host)if(has(host,k)&&id.indexOf(k+\"/\")===0)return host[k];\
if(typeof prev===\"function\")return prev.apply(this,arguments);\
throw new Error(\"Module \\\"\"+id+\"\\\" is not provided by the host page\")}";

/// Keeps a user-supplied name from breaking out of its comment line.
///
/// JavaScript ends a line comment at U+2028 and U+2029 as well as CR and LF.
fn single_line(text: &str) -> String {
    text.replace(['\r', '\n', '\u{2028}', '\u{2029}'], " ")
}

// ── Editor highlighting registry ──────────────────────────────────────────────
//
// The embedded editor component owns its own set of highlighting definitions
// and an extension index over them.  `HighlightingRegistry` is the seam the
// alias layer consults once the static extension table has no answer.

/// Lookup surface of the editor's highlighting-definition registry.
pub trait HighlightingRegistry {
    /// Definition registered for `ext` (no leading dot), if any.
    /// Matching is expected to be case-insensitive.
    fn definition_by_extension(&self, ext: &str) -> Option<&str>;

    /// Names of every registered definition, in registration order.
    fn definition_names(&self) -> Vec<&str>;
}

/// The stock definitions bundled with the editor, with their extensions.
static BUILTIN_DEFINITIONS: &[(&str, &[&str])] = &[
    ("XmlDoc", &[]),
    ("C#", &["cs"]),
    ("JavaScript", &["js"]),
    ("HTML", &["htm", "html"]),
    ("ASP/XHTML", &["asp", "aspx", "asax", "asmx", "ascx", "master"]),
    ("Boo", &["boo"]),
    ("Coco", &["atg"]),
    ("CSS", &["css"]),
    ("C++", &["c", "h", "cc", "cpp", "hpp"]),
    ("Java", &["java"]),
    ("Patch", &["patch", "diff"]),
    ("PowerShell", &["ps1", "psm1", "psd1"]),
    ("PHP", &["php"]),
    ("Python", &["py", "pyw"]),
    ("TeX", &["tex"]),
    ("TSQL", &["sql"]),
    ("VB", &["vb"]),
    (
        "XML",
        &[
            "xml", "xsl", "xslt", "xsd", "manifest", "config", "addin", "xshd", "wxs", "wxi",
            "wxl", "proj", "csproj", "drproj", "vbproj", "ilproj", "booproj", "build", "xfrm",
            "targets", "xaml", "xpt", "xft", "map", "wsdl", "disco", "ps1xml", "nuspec",
        ],
    ),
    ("MarkDown", &["md"]),
    ("MarkDownWithFontSize", &[]),
    ("Json", &["json"]),
];

/// Registry over the editor's stock definitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRegistry;

impl HighlightingRegistry for BuiltinRegistry {
    fn definition_by_extension(&self, ext: &str) -> Option<&str> {
        BUILTIN_DEFINITIONS
            .iter()
            .find(|(_, exts)| exts.iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .map(|(name, _)| *name)
    }

    fn definition_names(&self) -> Vec<&str> {
        BUILTIN_DEFINITIONS.iter().map(|(name, _)| *name).collect()
    }
}

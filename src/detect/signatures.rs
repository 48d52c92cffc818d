// ── Signature tables ──────────────────────────────────────────────────────────
//
// One rule set per language, in registration order.  Order matters only for
// tie-breaking: the first set to insert a key owns that key's position.
//
// The Rust and Go sets report under `Language::Cpp`.  Neither has a
// highlighting definition of its own, and the C-family definition is the
// closest match, so both feed the consolidated C / C++ bucket.

use once_cell::sync::Lazy;

use crate::languages::Language;

use super::rules::{all, count, lines, lit, not, rx, RuleSet, Trim};

static RULE_SETS: Lazy<Vec<RuleSet>> = Lazy::new(|| {
    vec![
        csharp(),
        java(),
        python(),
        javascript(),
        cpp(),
        html(),
        xml(),
        css(),
        php(),
        sql(),
        json(),
        markdown(),
        powershell(),
        batch(),
        rust(),
        go(),
        fsharp(),
        tex(),
        ini(),
        vb(),
        patch(),
    ]
});

/// Every rule set, compiled on first use and shared read-only afterwards.
pub(crate) fn rule_sets() -> &'static [RuleSet] {
    &RULE_SETS
}

fn csharp() -> RuleSet {
    RuleSet::new(
        Language::CSharp,
        vec![
            (rx(r"\busing\s+System\b"), 5),
            (rx(r"(?m)\busing\s+[\w.]+;\s*$"), 3),
            (rx(r"\bnamespace\s+\w+"), 4),
            (
                rx(r"\b(public|private|protected|internal)\s+(class|struct|interface|enum|record)\s+\w+"),
                4,
            ),
            (rx(r"\b(async\s+)?Task\b"), 2),
            (rx(r"\bvar\s+\w+\s*="), 1),
            (all(vec![rx(r"\bstring\b"), rx(r"\bint\b")]), 2),
            (rx(r"\bnew\s+\w+\s*\("), 1),
            (rx(r"\b(get|set)\s*[{;]"), 2),
            (rx(r"\bLinq\b|\bIEnumerable\b|\bList<"), 3),
            (rx(r"=>\s*\{?"), 1),
            (lit(&["[HttpGet]", "[HttpPost]", "[ApiController]"]), 4),
            (lit(&["Console.Write"]), 3),
        ],
    )
}

fn java() -> RuleSet {
    RuleSet::new(
        Language::Java,
        vec![
            (rx(r"\bimport\s+java\."), 5),
            (rx(r"\bimport\s+javax\."), 5),
            (rx(r"\bimport\s+org\."), 3),
            (rx(r"\bpublic\s+class\s+\w+"), 2),
            (rx(r"\bpublic\s+static\s+void\s+main\s*\("), 5),
            (rx(r"\bSystem\.out\.print"), 4),
            (rx(r"\bpackage\s+[\w.]+;"), 4),
            (rx(r"\b@Override\b"), 3),
            (rx(r"\bextends\s+\w+"), 2),
            (rx(r"\bimplements\s+\w+"), 2),
        ],
    )
}

fn python() -> RuleSet {
    RuleSet::new(
        Language::Python,
        vec![
            (rx(r"(?m)^\s*def\s+\w+\s*\("), 3),
            (rx(r"(?m)^\s*class\s+\w+.*:"), 3),
            (rx(r"(?m)^\s*import\s+\w+"), 2),
            (rx(r"(?m)^\s*from\s+\w+\s+import\s+"), 4),
            (rx(r"\bprint\s*\("), 2),
            (rx(r"(?m)\bif\s+.*:\s*$"), 2),
            (rx(r"\bfor\s+\w+\s+in\s+"), 3),
            (rx(r"\belif\b"), 4),
            (rx(r"\b__init__\b"), 5),
            (rx(r"\bself\.\w+"), 4),
            (rx(r"(?m)^\s*@\w+"), 1),
            (rx(r"\bTrue\b|\bFalse\b|\bNone\b"), 2),
            (lit(&[r#"""""#, "'''"]), 3),
            (rx(r"\blambda\s+\w+\s*:"), 3),
        ],
    )
}

fn javascript() -> RuleSet {
    RuleSet::new(
        Language::JavaScript,
        vec![
            (rx(r"\b(const|let)\s+\w+\s*="), 2),
            (rx(r"\bfunction\s+\w+\s*\("), 2),
            (rx(r"\b(export\s+)?(default\s+)?function\b"), 3),
            (rx(r"\b(export\s+)?(default\s+)?class\b"), 2),
            (rx(r"\bconsole\.(log|warn|error)\s*\("), 4),
            (rx(r#"\b(import|export)\s+.*\s+from\s+['"]"#), 5),
            (rx(r#"\brequire\s*\(['"]"#), 4),
            (rx(r"\bmodule\.exports\b"), 5),
            (rx(r"=>\s*[\{(]?"), 2),
            (rx(r"\b(async|await)\b"), 2),
            (
                rx(r"\bdocument\.(getElementById|querySelector|createElement)\b"),
                5,
            ),
            (rx(r"\bwindow\.\w+"), 3),
            (rx(r"\b(useState|useEffect|useRef|useCallback)\b"), 5),
            (rx(r"\b(React|Vue|Angular)\b"), 4),
            (rx(r"\bnew\s+Promise\b"), 3),
            (rx(r"\b(interface|type)\s+\w+\s*[{=]"), 3),
            (rx(r":\s*(string|number|boolean|any)\b"), 3),
            (lit(&["===", "!=="]), 2),
            (lit(&["undefined"]), 1),
        ],
    )
}

fn cpp() -> RuleSet {
    RuleSet::new(
        Language::Cpp,
        vec![
            (rx(r#"#include\s*[<"]"#), 5),
            (rx(r"\bstd::\w+"), 5),
            (rx(r"\bcout\s*<<"), 4),
            (rx(r"\bcin\s*>>"), 4),
            (rx(r"\bint\s+main\s*\("), 4),
            (rx(r"\bvoid\s+\w+\s*\("), 1),
            (rx(r"\b(nullptr|NULL)\b"), 3),
            (rx(r"\btemplate\s*<"), 4),
            (rx(r"\bvector\s*<"), 3),
            (rx(r"\bprintf\s*\("), 3),
            (rx(r"\bscanf\s*\("), 3),
            (rx(r"\b(struct|typedef)\s+\w+"), 2),
            (rx(r"\bclass\s+\w+\s*:\s*(public|private|protected)\b"), 4),
            (
                rx(r"\b(unique_ptr|shared_ptr|make_unique|make_shared)\b"),
                5,
            ),
            (rx(r"#define\s+\w+"), 3),
            (rx(r"#ifndef\s+\w+"), 3),
            (lit(&["->"]), 1),
            (lit(&["::"]), 2),
            // C# files routinely trip the generic C-family rules above.
            (rx(r"\busing\s+System\b"), -10),
        ],
    )
}

fn html() -> RuleSet {
    RuleSet::new(
        Language::Html,
        vec![
            (rx(r"(?i)<html[\s>]"), 5),
            (rx(r"(?i)<head[\s>]"), 4),
            (rx(r"(?i)<body[\s>]"), 4),
            (rx(r"(?i)<div[\s>]"), 3),
            (
                rx(r"(?i)<(p|span|a|h[1-6]|ul|li|table|form|input|button)[\s>]"),
                2,
            ),
            (rx(r"(?i)<script[\s>]"), 3),
            (rx(r"(?i)<style[\s>]"), 3),
            (rx(r"(?i)<link\s+.*rel="), 3),
            (rx(r#"class="[^"]*""#), 2),
            (rx(r"(?i)<!DOCTYPE\s+html"), 5),
        ],
    )
}

fn xml() -> RuleSet {
    RuleSet::new(
        Language::Xml,
        vec![
            (rx(r"<\?xml\s+"), 5),
            (rx(r"xmlns[:=]"), 4),
            (count(r"<\w+[\s/>]", 3), 2),
            (rx(r"<!\[CDATA\["), 4),
            // XHTML carries xmlns too; an <html> tag means HTML.
            (rx(r"(?i)<html[\s>]"), -10),
        ],
    )
}

fn css() -> RuleSet {
    RuleSet::new(
        Language::Css,
        vec![
            (rx(r"[.#][\w-]+\s*\{"), 3),
            (
                rx(r"\b(margin|padding|border|display|color|background|font-size|width|height)\s*:"),
                3,
            ),
            (rx(r"@media\s*\("), 5),
            (rx(r"@import\s+"), 3),
            (rx(r"@keyframes\s+\w+"), 5),
            (rx(r"\b(flex|grid|block|inline|none)\s*;"), 2),
            (rx(r":\s*(hover|focus|active|visited)\s*\{"), 4),
            (rx(r"\b(px|em|rem|%|vh|vw)\s*[;}]"), 2),
            (rx(r"\$[\w-]+\s*:"), 3),
            (rx(r"@mixin\s+\w+"), 5),
        ],
    )
}

fn php() -> RuleSet {
    RuleSet::new(
        Language::Php,
        vec![
            (lit(&["<?php"]), 10),
            (rx(r"\$\w+\s*="), 3),
            (rx(r"\becho\s+"), 3),
            (rx(r"\bfunction\s+\w+\s*\(.*\$"), 4),
            (rx(r"->[\w]+\s*\("), 2),
            (rx(r"\barray\s*\("), 3),
            (rx(r"\b(public|private|protected)\s+function\b"), 5),
            (rx(r"\bnew\s+\w+\s*\("), 1),
            (lit(&["$_GET", "$_POST", "$_SESSION"]), 5),
        ],
    )
}

fn sql() -> RuleSet {
    RuleSet::new(
        Language::Tsql,
        vec![
            (rx(r"(?is)\bSELECT\b.*\bFROM\b"), 5),
            (
                rx(r"(?i)\bCREATE\s+(TABLE|VIEW|INDEX|DATABASE|PROCEDURE|FUNCTION)\b"),
                5,
            ),
            (
                rx(r"(?i)\b(INSERT\s+INTO|UPDATE\s+\w+\s+SET|DELETE\s+FROM)\b"),
                5,
            ),
            (rx(r"(?i)\bALTER\s+TABLE\b"), 4),
            (rx(r"(?i)\bWHERE\b"), 2),
            (rx(r"(?i)\b(INNER|LEFT|RIGHT|OUTER)\s+JOIN\b"), 4),
            (rx(r"(?i)\bGROUP\s+BY\b"), 3),
            (rx(r"(?i)\bORDER\s+BY\b"), 3),
            (
                rx(r"(?i)\b(VARCHAR|INT|BIGINT|NVARCHAR|DATETIME|BIT|DECIMAL)\b"),
                3,
            ),
            (rx(r"(?is)\bBEGIN\b.*\bEND\b"), 2),
        ],
    )
}

fn json() -> RuleSet {
    RuleSet::new(
        Language::Json,
        vec![
            (rx(r#"^\s*\{\s*"[\w]+""#), 5),
            (rx(r#"^\s*\[\s*(\{|"|[0-9]|true|false|null)"#), 4),
            (rx(r#""[\w]+"\s*:\s*"#), 3),
            (rx(r"\bfunction\b|\bclass\b|\bimport\b|\bvar\b"), -10),
        ],
    )
    .guarded_by(rx(r"^\s*[\{\[]"))
}

const MARKDOWN_HEADING: &str = r"^#{1,6}\s+\w";

fn markdown() -> RuleSet {
    RuleSet::new(
        Language::Markdown,
        vec![
            (lines(MARKDOWN_HEADING, Trim::Start, 1), 2),
            (lines(MARKDOWN_HEADING, Trim::Start, 3), 3),
            (rx(r"(?m)^\s*[-*+]\s+\w"), 1),
            (rx(r"\[.+\]\(.+\)"), 3),
            (rx(r"```\w*\n"), 4),
            (rx(r"\*\*.+\*\*"), 2),
            (rx(r"!\[.+\]\(.+\)"), 3),
            (rx(r"(?m)^\s*>\s+"), 2),
            (
                all(vec![
                    rx(r"\bfunction\b|\bclass\b|\bimport\b"),
                    not(lines(MARKDOWN_HEADING, Trim::Start, 1)),
                ]),
                -5,
            ),
        ],
    )
}

fn powershell() -> RuleSet {
    RuleSet::new(
        Language::PowerShell,
        vec![
            (rx(r"\$PSVersionTable\b"), 5),
            (rx(r"\bfunction\s+\w+-\w+"), 5),
            (rx(r"\bGet-\w+|Set-\w+|New-\w+|Remove-\w+|Import-\w+"), 5),
            (rx(r"\bWrite-Host\b|\bWrite-Output\b"), 5),
            (rx(r"\[Parameter\("), 5),
            (rx(r"(?i)\bparam\s*\("), 3),
            (rx(r"\$_\b"), 3),
            (rx(r"\|\s*(Where-Object|ForEach-Object|Select-Object)"), 5),
            (all(vec![rx(r"\$\w+\s*="), not(lit(&["<?php"]))]), 1),
            (rx(r"\b-eq\b|-ne\b|-lt\b|-gt\b|-like\b|-match\b"), 4),
            (rx(r"\bCmdletBinding\b"), 5),
        ],
    )
}

fn batch() -> RuleSet {
    RuleSet::new(
        Language::Batch,
        vec![
            (rx(r"(?im)^@echo\s+off"), 10),
            (all(vec![rx(r"(?i)\becho\s+"), lit(&["%"])]), 3),
            (rx(r"(?i)\bset\s+\w+="), 3),
            (rx(r"(?i)\bgoto\s+:\w+"), 5),
            (rx(r"(?m)^:\w+"), 3),
            (rx(r"%\w+%"), 3),
            (rx(r"(?i)\bif\s+(not\s+)?exist\b"), 4),
            (rx(r"(?i)\bfor\s+/[fdlr]\b"), 5),
            (rx(r"(?i)\bREM\s+"), 2),
        ],
    )
}

fn rust() -> RuleSet {
    RuleSet::new(
        Language::Cpp,
        vec![
            (rx(r"\bfn\s+\w+\s*\("), 3),
            (rx(r"\blet\s+mut\s+\w+"), 5),
            (rx(r"\blet\s+\w+\s*:\s*\w+"), 3),
            (rx(r"\bimpl\s+\w+"), 5),
            (rx(r"\bpub\s+(fn|struct|enum|mod|trait)\b"), 5),
            (rx(r"\bmatch\s+\w+\s*\{"), 4),
            (rx(r"\b(Vec|Option|Result|String|Box)<"), 5),
            (rx(r"println!\s*\("), 5),
            (rx(r"\buse\s+std::"), 5),
            (rx(r"\buse\s+\w+::"), 3),
            (rx(r"&\w+|&mut\s+\w+"), 2),
            (rx(r"#\[derive\("), 5),
            (
                rx(r"\b(i32|u32|i64|u64|f64|f32|usize|isize|bool)\b"),
                3,
            ),
        ],
    )
}

fn go() -> RuleSet {
    RuleSet::new(
        Language::Cpp,
        vec![
            (rx(r"(?m)^package\s+\w+"), 5),
            (rx(r"\bfunc\s+\w+\s*\("), 3),
            (rx(r"\bfunc\s+\(\w+\s+\*?\w+\)\s+\w+"), 5),
            (rx(r"\bfmt\.Print"), 5),
            (rx(r"\bimport\s*\("), 4),
            (rx(r":="), 2),
            (rx(r"\bgo\s+\w+\("), 4),
            (rx(r"\bchan\s+\w+"), 5),
            (rx(r"\bdefer\s+"), 4),
            (rx(r"\btype\s+\w+\s+struct\b"), 5),
            (rx(r"\btype\s+\w+\s+interface\b"), 5),
            (rx(r"\bif\s+err\s*!=\s*nil\b"), 5),
        ],
    )
}

fn fsharp() -> RuleSet {
    RuleSet::new(
        Language::FSharp,
        vec![
            (rx(r"\blet\s+\w+\s*="), 2),
            (rx(r"\blet\s+(rec\s+)?\w+\s+\w+\s*="), 3),
            (rx(r"\bmodule\s+\w+"), 3),
            (rx(r"\|>\s*"), 4),
            (rx(r"\bopen\s+\w+"), 3),
            (rx(r"\bmatch\s+\w+\s+with\b"), 5),
            (rx(r#"\bprintfn\s+""#), 5),
            (rx(r"\btype\s+\w+\s*="), 2),
        ],
    )
}

fn tex() -> RuleSet {
    RuleSet::new(
        Language::Tex,
        vec![
            (rx(r"\\documentclass\b"), 10),
            (rx(r"\\begin\{document\}"), 10),
            (rx(r"\\(section|subsection|chapter|title|author)\b"), 4),
            (rx(r"\\(textbf|textit|emph|cite|ref)\b"), 3),
            (rx(r"\\usepackage\b"), 5),
            (rx(r"\\begin\{\w+\}"), 3),
        ],
    )
}

const INI_SECTION: &str = r"^\[\w+[\w\s]*\]$";

fn ini() -> RuleSet {
    RuleSet::new(
        Language::Ini,
        vec![
            (lines(INI_SECTION, Trim::Both, 1), 3),
            (lines(INI_SECTION, Trim::Both, 3), 3),
            (lines(r"^\w[\w\s]*\s*=\s*.+", Trim::Both, 3), 3),
            (lines(r"^;", Trim::Start, 1), 2),
            (rx(r"\bfunction\b|\bclass\b|\bimport\b|\bdef\b"), -10),
        ],
    )
}

fn vb() -> RuleSet {
    RuleSet::new(
        Language::Vb,
        vec![
            (rx(r"(?i)\bModule\s+\w+"), 4),
            (rx(r"(?i)\bSub\s+\w+\s*\("), 3),
            (rx(r"(?i)\bDim\s+\w+\s+As\b"), 5),
            (rx(r"(?i)\bEnd\s+(Sub|Function|If|Module|Class)\b"), 4),
            (rx(r"\bImports\s+System\b"), 5),
            (rx(r"(?i)\bMsgBox\s*\("), 4),
        ],
    )
}

fn patch() -> RuleSet {
    RuleSet::new(
        Language::Patch,
        vec![
            (rx(r"(?m)^diff --git\b"), 10),
            (rx(r"(?m)^---\s+a/"), 5),
            (rx(r"(?m)^\+\+\+\s+b/"), 5),
            (rx(r"(?m)^@@\s+-\d+,\d+\s+\+\d+,\d+\s+@@"), 5),
            (
                all(vec![
                    // Added / removed lines, excluding the `+++` / `---` headers.
                    lines(r"^\+(?:$|[^+]|\+(?:$|[^+]))", Trim::None, 4),
                    lines(r"^-(?:$|[^-]|-(?:$|[^-]))", Trim::None, 4),
                ]),
                3,
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::detect::{rules::Probe, score, Sample};

    fn scores(content: &str) -> score::ScoreMap {
        let sample = Sample::new(content, 4000);
        let probe = Probe::new(&sample, Duration::from_secs(1));
        score::score(rule_sets(), &probe).expect("within budget")
    }

    fn winner(content: &str) -> Option<Language> {
        score::select(&scores(content), 3)
    }

    #[test]
    fn all_rule_sets_compile() {
        assert_eq!(rule_sets().len(), 21);
    }

    #[test]
    fn rust_and_go_report_as_cpp() {
        let keys: Vec<Language> = rule_sets().iter().map(|set| set.key).collect();
        assert_eq!(keys.iter().filter(|k| **k == Language::Cpp).count(), 3);
    }

    #[test]
    fn csharp_program() {
        let content = "using System;\nusing System.Linq;\n\nnamespace Demo\n{\n    public class Program\n    {\n        static void Main() { Console.WriteLine(\"hi\"); }\n    }\n}\n";
        assert_eq!(winner(content), Some(Language::CSharp));
        // `using System` pushes the C-family total below zero.
        assert_eq!(scores(content).get(Language::Cpp), None);
    }

    #[test]
    fn java_program() {
        let content = "package com.example;\n\nimport java.util.List;\n\npublic class App {\n    public static void main(String[] args) {\n        System.out.println(\"hi\");\n    }\n}\n";
        assert_eq!(winner(content), Some(Language::Java));
    }

    #[test]
    fn python_module() {
        let content = "from os import path\n\nclass Greeter:\n    def __init__(self, name):\n        self.name = name\n\n    def greet(self):\n        if self.name:\n            print(self.name)\n";
        assert_eq!(winner(content), Some(Language::Python));
    }

    #[test]
    fn javascript_module() {
        let content = "import React, { useState } from 'react';\n\nexport default function App() {\n  const [n, setN] = useState(0);\n  console.log(n);\n  return null;\n}\n";
        assert_eq!(winner(content), Some(Language::JavaScript));
    }

    #[test]
    fn cpp_program() {
        let content = "#include <iostream>\n\nint main() {\n    std::cout << \"hi\" << std::endl;\n    return 0;\n}\n";
        assert_eq!(winner(content), Some(Language::Cpp));
    }

    #[test]
    fn rust_program_is_cpp_bucket() {
        let content = "use std::collections::HashMap;\n\n#[derive(Debug)]\npub struct Point { x: i32 }\n\nfn main() {\n    let mut v: Vec<i32> = Vec::new();\n    println!(\"{:?}\", v);\n}\n";
        assert_eq!(winner(content), Some(Language::Cpp));
    }

    #[test]
    fn html_with_xmlns_is_not_xml() {
        let content = "<!-- page -->\n<html xmlns=\"http://www.w3.org/1999/xhtml\">\n<head><title>x</title></head>\n<body><div class=\"main\">hi</div></body>\n</html>\n";
        let map = scores(content);
        assert_eq!(map.get(Language::Xml), None);
        assert_eq!(winner(content), Some(Language::Html));
    }

    #[test]
    fn xml_without_declaration() {
        let content = "<project xmlns=\"http://maven.apache.org/POM/4.0.0\">\n  <modelVersion>4.0.0</modelVersion>\n  <artifactId>demo</artifactId>\n</project>\n";
        assert_eq!(winner(content), Some(Language::Xml));
    }

    #[test]
    fn css_stylesheet() {
        let content = ".card {\n  margin: 0 auto;\n  display: flex;\n}\n\na:hover {\n  color: red;\n}\n\n@media (max-width: 600px) {\n  .card { width: 100%; }\n}\n";
        assert_eq!(winner(content), Some(Language::Css));
    }

    #[test]
    fn sql_query() {
        let content = "SELECT u.id, u.name\nFROM users u\nINNER JOIN orders o ON o.user_id = u.id\nWHERE o.total > 10\nORDER BY u.name;\n";
        assert_eq!(winner(content), Some(Language::Tsql));
    }

    #[test]
    fn json_array() {
        assert_eq!(winner("[{\"id\": 1}, {\"id\": 2}]"), Some(Language::Json));
    }

    #[test]
    fn json_guard_rejects_code() {
        let map = scores("{ var x = \"a\": 1 }");
        assert_eq!(map.get(Language::Json), None);
    }

    #[test]
    fn markdown_document() {
        let content = "# Title\n\nSome **bold** text and a [link](http://example.com).\n\n## Usage\n\n- one\n- two\n\n### Notes\n";
        assert_eq!(winner(content), Some(Language::Markdown));
    }

    #[test]
    fn powershell_script() {
        let content = "[CmdletBinding()]\nparam([string]$Name)\nGet-ChildItem | Where-Object { $_.Length -gt 100 }\nWrite-Host $Name\n";
        assert_eq!(winner(content), Some(Language::PowerShell));
    }

    #[test]
    fn batch_file() {
        let content = "@echo off\nset NAME=world\nif not exist out mkdir out\necho Hello %NAME%\ngoto :end\n:end\n";
        assert_eq!(winner(content), Some(Language::Batch));
    }

    #[test]
    fn fsharp_script() {
        let content = "module Demo\n\nopen System\n\nlet square x = x * x\n\n[1; 2; 3] |> List.map square |> printfn \"%A\"\n";
        assert_eq!(winner(content), Some(Language::FSharp));
    }

    #[test]
    fn latex_body_without_preamble_header() {
        let content = "% notes\n\\section{Intro}\n\\begin{itemize}\n\\item \\textbf{one}\n\\end{itemize}\n";
        assert_eq!(winner(content), Some(Language::Tex));
    }

    #[test]
    fn ini_file() {
        let content = "; settings\n[general]\nname = demo\nlevel = 3\n\n[paths]\nroot = /tmp\n\n[extra]\nflag = on\n";
        assert_eq!(winner(content), Some(Language::Ini));
    }

    #[test]
    fn vb_module() {
        let content = "Imports System\n\nModule Program\n    Sub Main()\n        Dim name As String = \"x\"\n        MsgBox(name)\n    End Sub\nEnd Module\n";
        assert_eq!(winner(content), Some(Language::Vb));
    }

    #[test]
    fn patch_without_leading_header() {
        let content = "index 1234..5678 100644\n--- a/f.txt\n+++ b/f.txt\n@@ -1,4 +1,4 @@\n-a\n-b\n-c\n-d\n+e\n+f\n+g\n+h\n";
        assert_eq!(winner(content), Some(Language::Patch));
    }
}

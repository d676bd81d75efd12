//! Fence info strings inferred from file names.

use std::path::Path;

/// The Markdown language identifier for a file, if one is known.
///
/// Well-known extensionless build files are recognized by name; everything
/// else goes by its (case-insensitive) extension.
pub fn language_for(path: &Path) -> Option<&'static str> {
    let name = path.file_name()?.to_str()?;

    let by_name = match name {
        "Makefile" | "GNUmakefile" | "makefile" => Some("makefile"),
        "Dockerfile" | "Containerfile" => Some("dockerfile"),
        "CMakeLists.txt" => Some("cmake"),
        "Rakefile" | "Gemfile" | "Vagrantfile" => Some("ruby"),
        _ => None,
    };
    if by_name.is_some() {
        return by_name;
    }

    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let lang = match ext.as_str() {
        "py" | "pyi" => "python",
        "js" | "mjs" | "cjs" => "javascript",
        "ts" | "mts" | "cts" => "typescript",
        "jsx" => "jsx",
        "tsx" => "tsx",
        "java" => "java",
        "c" | "h" => "c",
        "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" => "cpp",
        "cs" => "csharp",
        "rb" => "ruby",
        "go" => "go",
        "rs" => "rust",
        "php" => "php",
        "html" | "htm" => "html",
        "css" => "css",
        "scss" => "scss",
        "sql" => "sql",
        "sh" | "bash" | "zsh" => "bash",
        "ps1" => "powershell",
        "rkt" => "racket",
        "hs" => "haskell",
        "scala" => "scala",
        "ml" | "mli" => "ocaml",
        "elm" => "elm",
        "clj" | "cljc" | "cljs" => "clojure",
        "ex" | "exs" => "elixir",
        "erl" => "erlang",
        "fs" | "fsx" => "fsharp",
        "lisp" => "lisp",
        "scm" => "scheme",
        "sml" => "sml",
        "swift" => "swift",
        "kt" | "kts" => "kotlin",
        "groovy" => "groovy",
        "pl" | "pm" | "t" => "perl",
        "lua" => "lua",
        "jl" => "julia",
        "dart" => "dart",
        "d" => "d",
        "nim" => "nim",
        "cr" => "crystal",
        "r" => "r",
        "asm" | "s" => "asm",
        "zig" => "zig",
        "v" => "v",
        "ada" | "adb" | "ads" => "ada",
        "f90" | "f95" | "f03" | "f08" => "fortran",
        "pas" => "pascal",
        "cob" | "cobol" => "cobol",
        "vb" | "vba" | "vbs" => "vbnet",
        "tcl" => "tcl",
        "hx" => "haxe",
        "m" | "mm" => "objectivec",
        "coffee" => "coffeescript",
        "ls" => "livescript",
        "raku" => "raku",
        "bf" => "brainfuck",
        "md" | "markdown" => "markdown",
        "rst" => "rst",
        "tex" => "latex",
        "json" => "json",
        "xml" => "xml",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        "ini" | "cfg" | "conf" => "ini",
        "csv" => "csv",
        "diff" | "patch" => "diff",
        _ => return None,
    };
    Some(lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_extensions() {
        assert_eq!(language_for(Path::new("a.py")), Some("python"));
        assert_eq!(language_for(Path::new("cmd/main.go")), Some("go"));
        assert_eq!(language_for(Path::new("src/lib.rs")), Some("rust"));
        assert_eq!(language_for(Path::new("index.tsx")), Some("tsx"));
    }

    #[test]
    fn extension_is_case_insensitive() {
        assert_eq!(language_for(Path::new("LEGACY.C")), Some("c"));
        assert_eq!(language_for(Path::new("analysis.R")), Some("r"));
    }

    #[test]
    fn build_files_by_name() {
        assert_eq!(language_for(Path::new("proj/Makefile")), Some("makefile"));
        assert_eq!(language_for(Path::new("Dockerfile")), Some("dockerfile"));
        assert_eq!(language_for(Path::new("CMakeLists.txt")), Some("cmake"));
    }

    #[test]
    fn unknown_has_no_tag() {
        assert_eq!(language_for(Path::new("notes.txt")), None);
        assert_eq!(language_for(Path::new("LICENSE")), None);
        assert_eq!(language_for(Path::new("archive.xyz")), None);
    }
}

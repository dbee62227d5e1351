use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    let hints = HintCollector::collect(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

#[derive(Default)]
struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn collect(err: &Error) -> Vec<String> {
        let mut collector = Self::default();

        collector.collect_io_hints(err);
        collector.collect_layout_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        collector.hints
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_io_hints(&mut self, err: &Error) {
        use lewis_layout::io::Error as IoError;

        let Some(io_err) = err.downcast_ref::<IoError>() else {
            return;
        };

        self.mark_typed();

        match io_err {
            IoError::Io { source } => self.collect_std_io_hints(source),

            IoError::Parse { line, .. } => {
                self.add(format!("Inspect the record around line {line}"));
                self.add("SDF: the counts line must be V2000 with 3-column atom and bond counts");
                self.add("SDF: atom lines use 10-column x/y/z fields and the symbol in columns 32-34");
                self.add("Only the first record of a multi-record file is read");
            }

            IoError::UnsupportedReadFormat(fmt) => {
                self.add(format!("The '{fmt}' format cannot be used for input"));
                self.add("Supported input formats: sdf, mol");
            }

            IoError::UnsupportedWriteFormat(fmt) => {
                self.add(format!("The '{fmt}' format cannot be used for output"));
                self.add("Supported output formats: svg");
            }

            IoError::ConformerMismatch { .. } => {
                self.add("The --coords-2d file must describe the same atoms in the same order");
                self.add("Omit --coords-2d to place atoms with the VSEPR heuristic");
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::InvalidData => {
                self.add("File contains invalid or non-UTF-8 data");
                self.add("Verify the file is a text SDF/molfile");
            }

            ErrorKind::BrokenPipe => {
                self.add("Broken pipe: the output consumer terminated early");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn collect_layout_hints(&mut self, err: &Error) {
        use lewis_layout::LayoutError;

        let Some(layout_err) = err.downcast_ref::<LayoutError>() else {
            return;
        };

        self.mark_typed();

        match layout_err {
            LayoutError::ConfigParse(_) => {
                self.add("The config file is not valid TOML for this tool");
                self.add("Allowed tables: [layout], [canvas], [style]");
                self.add("Colors must be written as \"#rrggbb\" or \"#rgb\"");
            }

            LayoutError::InvalidConfig { field, .. } => {
                self.add(format!("Check the value of '{field}'"));
                if field.starts_with("canvas.") {
                    self.add("Padding must leave room on both axes: 2 * padding < min(width, height)");
                }
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("terminal") || msg.contains("stdin") {
            self.add("Provide input via -i/--input or pipe data to stdin");
            return;
        }

        if msg.contains("infer format") {
            self.add("Use a .sdf or .mol input and an .svg output path");
            return;
        }

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}

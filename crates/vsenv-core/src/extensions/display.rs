//! Terminal formatting for extension divergence

use crate::extensions::ExtensionDiff;
use std::fmt::Write;

/// Heading for extensions installed in the editor but not recorded
pub const REMOTE_HEADING: &str = "* REMOTE";
/// Heading for recorded extensions missing from the editor
pub const LOCAL_HEADING: &str = "* LOCAL";

const RULE_WIDTH: usize = 40;

/// Format a divergence report
///
/// Each non-empty side gets a blank line, a heading, a rule and one
/// identifier per line. Equal sets produce an empty string.
#[must_use]
pub fn format_diff_terminal(diff: &ExtensionDiff) -> String {
    let mut output = String::new();
    write_section(&mut output, REMOTE_HEADING, &diff.remote_only);
    write_section(&mut output, LOCAL_HEADING, &diff.local_only);
    output
}

fn write_section(output: &mut String, heading: &str, ids: &[String]) {
    if ids.is_empty() {
        return;
    }

    writeln!(output).unwrap();
    writeln!(output, "{heading}").unwrap();
    writeln!(output, "{}", "-".repeat(RULE_WIDTH)).unwrap();
    for id in ids {
        writeln!(output, "{id}").unwrap();
    }
}

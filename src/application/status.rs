use std::path::Path;

use colored::Colorize;
use supports_color::Stream;

/// Prints the single stdout line announcing a successful run.
pub fn print_saved(output: &Path) {
    println!("{}", saved_message(output, colors_enabled()));
}

fn colors_enabled() -> bool {
    supports_color::on(Stream::Stdout).is_some()
}

fn saved_message(output: &Path, colored: bool) -> String {
    let output = output.display().to_string();
    let output = if colored {
        output.green().bold().to_string()
    } else {
        output
    };
    format!("File map generated and saved to {output}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_message_names_the_output_path() {
        let message = saved_message(Path::new("file_map.txt"), false);
        assert_eq!(message, "File map generated and saved to file_map.txt");
    }

    #[test]
    fn colored_message_still_contains_the_output_path() {
        colored::control::set_override(true);
        let message = saved_message(Path::new("out/map.txt"), true);
        colored::control::unset_override();

        assert!(message.starts_with("File map generated and saved to "));
        assert!(message.contains("out/map.txt"));
    }
}

use std::process::Command;

use colored::{ColoredString, Colorize};

fn line(tag: ColoredString, message: &str) {
    eprintln!("{tag} {message}");
}

pub fn status(message: impl AsRef<str>) {
    line("==>".blue().bold(), message.as_ref());
}

pub fn success(message: impl AsRef<str>) {
    line("ok".green().bold(), message.as_ref());
}

pub fn warn(message: impl AsRef<str>) {
    line("warn".yellow().bold(), message.as_ref());
}

pub fn error(message: impl AsRef<str>) {
    line("error".red().bold(), message.as_ref());
}

pub fn format_command(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;

    if bytes >= MIB {
        format!("{:.2} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.2} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_byte_sizes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.00 KiB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.00 MiB");
    }

    #[test]
    fn formats_command_line() {
        let mut cmd = Command::new("cargo");
        cmd.arg("build").arg("--release");
        assert_eq!(format_command(&cmd), "cargo build --release");
    }
}

//! `--manual`: print the embedded manual.

/// Manual text compiled into the binary.
pub const MANUAL: &str = include_str!("../../assets/manual.txt");

/// Print the manual to stdout.
pub fn run() {
    print!("{MANUAL}");
}

//! Alias suggestion command.

use cluestory::next_alias;

/// Print the first alias not in `used`.
pub fn print_next_alias(used: &[String]) {
    println!("{}", next_alias(used));
}

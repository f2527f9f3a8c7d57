//! Output formatting for contact search results

use crate::contact::Contact;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print one query's result list under a heading with the match count.
pub fn print_matches(heading: &str, matches: &[Contact], color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    write!(stdout, "{}", heading)?;
    stdout.reset()?;
    writeln!(stdout, " ({} found)", matches.len())?;

    for contact in matches {
        print_contact(&mut stdout, contact)?;
    }

    Ok(())
}

/// Print a single contact line: name, phone, address.
fn print_contact(stdout: &mut StandardStream, contact: &Contact) -> io::Result<()> {
    write!(stdout, "  ")?;
    stdout.set_color(ColorSpec::new().set_bold(true))?;
    write!(stdout, "{} {}", contact.first_name, contact.last_name)?;
    stdout.reset()?;

    write!(stdout, "  ")?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(stdout, "{}", contact.phone_number)?;
    stdout.reset()?;

    if contact.address.is_empty() {
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "  {}", contact.address)?;
    }

    Ok(())
}

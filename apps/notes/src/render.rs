use std::io::{self, Write};

use notes_domain::{Locale, Message, Note};

const PREVIEW_CHARS: usize = 72;

pub fn notes<W>(out: &mut W, notes: &[Note], locale: Locale) -> io::Result<()>
where
	W: Write,
{
	if notes.is_empty() {
		return writeln!(out, "{}", Message::NoNotes.text(locale));
	}

	for note in notes {
		writeln!(out, "#{} {}", note.id, note.title)?;

		for line in note.content.lines() {
			writeln!(out, "    {}", notes_cli::truncate(line, PREVIEW_CHARS))?;
		}
	}

	Ok(())
}

pub fn notes_json<W>(out: &mut W, notes: &[Note]) -> io::Result<()>
where
	W: Write,
{
	serde_json::to_writer_pretty(&mut *out, notes)?;

	writeln!(out)
}

pub fn message<W>(out: &mut W, message: Message, locale: Locale) -> io::Result<()>
where
	W: Write,
{
	writeln!(out, "{}", message.text(locale))
}

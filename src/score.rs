use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

pub const HEADER: &str = concat!(
    "\\version \"2.22.1\"\n",
    "\n",
    "#(set-global-staff-size 28)\n",
    "\n",
    "\\paper {\n",
    "  indent = 0\\mm\n",
    "  line-width = 140\\mm\n",
    "  oddFooterMarkup = ##f\n",
    "  oddHeaderMarkup = ##f\n",
    "  bookTitleMarkup = ##f\n",
    "  scoreTitleMarkup = ##f\n",
    "}\n",
    "\n",
);

pub const BODY: &str = concat!(
    "melody = \\relative c'' {\n",
    "  \\clef treble\n",
    "  \\time 4/4\n",
    "\n",
    "  a4 g4 ais4 r8 b8 cis4 e4 f4 ees16 e8.\n",
    "}\n",
    "\n",
);

pub const FOOTER: &str = concat!(
    "\\score {\n",
    "  \\new Staff \\melody\n",
    "  \\layout { }\n",
    "  \\midi { }\n",
    "}\n",
);

/// The named blocks in the order they are written.
pub fn blocks() -> [(&'static str, &'static str); 3] {
    [("header", HEADER), ("body", BODY), ("footer", FOOTER)]
}

pub fn score_len() -> usize {
    blocks().iter().map(|(_, block)| block.len()).sum()
}

/// Writes header, body and footer in order. The first failing block aborts
/// the rest.
pub fn write_blocks<W: Write>(writer: &mut W) -> Result<()> {
    for (name, block) in blocks() {
        writer
            .write_all(block.as_bytes())
            .wrap_err_with(|| format!("Failed to write {name} block"))?;
    }

    Ok(())
}

fn create_output(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    options.open(path)
}

/// Creates or truncates `path` and writes the full score into it.
///
/// A failure part-way leaves whatever was already written in place.
pub fn write_score(path: &Path) -> Result<()> {
    let mut file = create_output(path)
        .wrap_err_with(|| format!("Failed to open {} for writing", path.display()))?;

    write_blocks(&mut file).wrap_err_with(|| format!("Failed to write {}", path.display()))?;

    file.sync_all()
        .wrap_err_with(|| format!("Failed to flush {}", path.display()))?;

    Ok(())
}

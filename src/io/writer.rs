//! Schedule file writer.
//!
//! Output is the command count on the first line, then one command per
//! line in commit order: `<drone> <L|D> <warehouse|order> <type> <count>`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::world::World;

/// Writes the world's committed commands.
pub fn write_schedule<W: Write>(mut out: W, world: &World) -> io::Result<()> {
    writeln!(out, "{}", world.command_count())?;
    for command in world.commands() {
        writeln!(out, "{command}")?;
    }
    out.flush()
}

/// Writes the world's committed commands to a file, replacing it.
pub fn save_schedule(path: impl AsRef<Path>, world: &World) -> io::Result<()> {
    let file = File::create(path.as_ref())?;
    write_schedule(BufWriter::new(file), world)
}

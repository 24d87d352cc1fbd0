//! Command implementations, kept free of terminal output so they can be tested.

use crate::{
    cli::Side,
    error::{CliError, Result},
};
use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};
use tracing::debug;
use tzhash::{Hash, TzHash};

/// Path naming standard input.
pub(crate) const STDIN: &str = "-";

/// Hash everything `reader` yields, streaming unless a parallel `chunk_size` is given.
pub(crate) fn hash_reader<R: Read>(mut reader: R, chunk_size: Option<usize>) -> io::Result<Hash> {
    match chunk_size {
        Some(chunk_size) => {
            let mut data = Vec::new();
            reader.read_to_end(&mut data)?;
            Ok(tzhash::hash_par(&data, chunk_size))
        }
        None => {
            let mut hasher = TzHash::new();
            io::copy(&mut reader, &mut hasher)?;
            Ok(hasher.digest())
        }
    }
}

/// Hash the file at `path`, or standard input for `-`.
pub(crate) fn hash_path(path: &Path, chunk_size: Option<usize>) -> Result<Hash> {
    let read_error = |source: io::Error| CliError::Read {
        path: path.to_path_buf(),
        source,
    };

    debug!(path = %path.display(), ?chunk_size, "hashing");
    if path == Path::new(STDIN) {
        hash_reader(io::stdin().lock(), chunk_size).map_err(read_error)
    } else {
        let file = File::open(path).map_err(read_error)?;
        hash_reader(BufReader::new(file), chunk_size).map_err(read_error)
    }
}

/// Decode a hex-encoded hash argument. Length is checked by the hash functions.
pub(crate) fn parse_hash(arg: &str) -> Result<Vec<u8>> {
    hex::decode(arg.trim()).map_err(|source| CliError::Hex {
        arg: arg.to_owned(),
        source,
    })
}

fn parse_hashes(args: &[String]) -> Result<Vec<Vec<u8>>> {
    args.iter().map(|arg| parse_hash(arg)).collect()
}

pub(crate) fn concat(hashes: &[String]) -> Result<Hash> {
    let hashes = parse_hashes(hashes)?;
    debug!(count = hashes.len(), "combining hashes");
    Ok(tzhash::concat_hashes(&hashes)?)
}

pub(crate) fn validate(combined: &str, hashes: &[String]) -> Result<bool> {
    let combined = parse_hash(combined)?;
    let hashes = parse_hashes(hashes)?;
    Ok(tzhash::try_validate_hashes(&combined, &hashes)?)
}

pub(crate) fn subtract(side: Side, combined: &str, part: &str) -> Result<Hash> {
    let combined = parse_hash(combined)?;
    let part = parse_hash(part)?;
    let hash = match side {
        Side::Left => tzhash::subtract_left(&combined, &part)?,
        Side::Right => tzhash::subtract_right(&combined, &part)?,
    };
    Ok(hash)
}

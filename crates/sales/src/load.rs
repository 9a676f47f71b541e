//! Loading the item and member files into a [`Group`].
//!
//! One record per line; blank lines are skipped. Any malformed record aborts
//! the whole load, so a partially loaded group is never handed out.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use fundraiser_catalog::{Catalog, Item};
use fundraiser_core::DomainError;
use fundraiser_roster::{Member, Roster};

use crate::group::Group;

/// Fatal load failure. The message names the offending source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Can't open file: {source_name}")]
    Open {
        source_name: String,
        #[source]
        source: io::Error,
    },

    #[error("Can't read file: {source_name}")]
    Read {
        source_name: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid item file: {source_name}")]
    InvalidItemFile {
        source_name: String,
        line: usize,
        #[source]
        reason: DomainError,
    },

    #[error("Invalid member file: {source_name}")]
    InvalidMemberFile {
        source_name: String,
        line: usize,
        #[source]
        reason: DomainError,
    },
}

/// Read item records from `reader` into `catalog`. Returns the number added.
pub fn read_items<R: BufRead>(
    reader: R,
    source_name: &str,
    catalog: &mut Catalog,
) -> Result<usize, LoadError> {
    let mut added = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Read {
            source_name: source_name.to_string(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let item = Item::from_record(&line).map_err(|reason| LoadError::InvalidItemFile {
            source_name: source_name.to_string(),
            line: index + 1,
            reason,
        })?;
        catalog.add(item);
        added += 1;
    }
    Ok(added)
}

/// Read member records from `reader` into `roster`. Returns the number added.
///
/// A member id already on the roster is a load error.
pub fn read_members<R: BufRead>(
    reader: R,
    source_name: &str,
    roster: &mut Roster,
) -> Result<usize, LoadError> {
    let mut added = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Read {
            source_name: source_name.to_string(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let invalid = |reason| LoadError::InvalidMemberFile {
            source_name: source_name.to_string(),
            line: index + 1,
            reason,
        };
        let member = Member::from_record(&line).map_err(invalid)?;
        roster.add(member).map_err(invalid)?;
        added += 1;
    }
    Ok(added)
}

/// Load both files and assemble the group.
pub fn load_group(items_path: &Path, members_path: &Path) -> Result<Group, LoadError> {
    let mut catalog = Catalog::new();
    let items_name = items_path.display().to_string();
    let items = read_items(open(items_path)?, &items_name, &mut catalog)?;

    let mut roster = Roster::new();
    let members_name = members_path.display().to_string();
    let members = read_members(open(members_path)?, &members_name, &mut roster)?;

    tracing::info!(items, members, "group loaded");
    Ok(Group::new(catalog, roster))
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LoadError::Open {
            source_name: path.display().to_string(),
            source,
        })
}

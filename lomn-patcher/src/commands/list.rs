//! Patch catalog listing command

use anyhow::Result;
use clap::Args;
use console::style;

use lomn_patch::catalog;

use crate::utils::{add_table_row, create_table, format_address, format_offset, payload_kind};

#[derive(Args)]
pub struct ListArgs {
    /// Show every write performed by each patch
    #[arg(short, long)]
    pub long: bool,
}

pub fn execute(args: &ListArgs) -> Result<()> {
    println!("{}", style("Available patches:").bold());

    if args.long {
        let mut table = create_table(vec!["Name", "Offset", "Address", "Length", "Kind"]);
        for patch in catalog() {
            for write in patch.writes {
                add_table_row(
                    &mut table,
                    vec![
                        patch.name.to_string(),
                        format_offset(write.offset),
                        format_address(write.address),
                        write.payload.len().to_string(),
                        payload_kind(&write.payload).to_string(),
                    ],
                );
            }
        }
        table.printstd();
    } else {
        let mut table = create_table(vec!["Name", "Description", "Writes", "Bytes"]);
        for patch in catalog() {
            add_table_row(
                &mut table,
                vec![
                    patch.name.to_string(),
                    patch.description.to_string(),
                    patch.writes.len().to_string(),
                    patch.byte_count().to_string(),
                ],
            );
        }
        table.printstd();
    }

    Ok(())
}

//! Category listing command implementation

use anyhow::Result;
use subtrack_core::{distinct_categories, Subscription};

pub fn cmd_categories(subs: &[Subscription]) -> Result<()> {
    let options = distinct_categories(subs);

    println!();
    println!("🏷  Categories");
    for option in options {
        println!("   {}", option);
    }

    Ok(())
}

//
// Copyright 2020 bplist Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! A thin pretty-printer over the `sfv` library: reads one structured field
//! value from standard input and prints its parse tree.

use std::io::Read;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(name = "sfv", about = "Parse an HTTP structured field value read from standard input")]
struct Cli {
    /// Parse standard input as an Item (the default).
    #[arg(long)]
    item: bool,

    /// Parse standard input as a List.
    #[arg(long)]
    list: bool,

    /// Parse standard input as a Dictionary.
    #[arg(long)]
    dictionary: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut input = Vec::new();
    if let Err(err) = std::io::stdin().read_to_end(&mut input) {
        eprintln!("error: failed to read standard input: {}", err);
        return ExitCode::from(2);
    }
    while input.last() == Some(&b'\n') {
        input.pop();
    }

    let rendered = if cli.list {
        sfv::parse_list(&input).map(|list| format!("{:#?}", list))
    } else if cli.dictionary {
        sfv::parse_dictionary(&input).map(|dict| format!("{:#?}", dict))
    } else {
        sfv::parse_item(&input).map(|item| format!("{:#?}", item))
    };

    match rendered {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(1)
        }
    }
}

// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  classify.rs - Classification demo for PCB fabrication files.
 *  Copyright (C) 2026  Forest Crossman <cyrozap@gmail.com>
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

use std::fs;

use clap::Parser;

use pcbsort::classifier::*;
use pcbsort::format::*;
use pcbsort::tables;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The files to classify.
    files: Vec<String>,
}

fn main() {
    let args = Args::parse();

    for path in &args.files {
        let ext = file_ext(path);
        if tables::is_denylisted(ext) {
            println!("{}: skipped (denylisted extension {:?})", path, ext);
            continue;
        }

        let contents = match fs::read(path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).to_string(),
            Err(error) => {
                eprintln!("Error reading file {:?}: {:?}", path, error);
                continue;
            }
        };

        let file_type = board_file_type(&contents);
        let assignment = determine_side_and_layer(path);

        println!(
            "{}: format={:?} side={:?} layer={:?}",
            path, file_type, assignment.side, assignment.layer
        );
    }
}

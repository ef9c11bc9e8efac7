// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  report.rs - CSV classification report for a directory of uploads.
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
use std::io;

use clap::Parser;

use pcbsort::classifier::*;
use pcbsort::format::*;
use pcbsort::tables;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The directory to scan.
    dir: String,
}

fn main() {
    let args = Args::parse();

    let entries = match fs::read_dir(&args.dir) {
        Ok(entries) => entries,
        Err(error) => {
            eprintln!("Error reading directory {:?}: {:?}", &args.dir, error);
            return;
        }
    };

    let mut writer = csv::Writer::from_writer(io::stdout());
    if let Err(error) = writer.write_record(["file", "extension", "format", "side", "layer"]) {
        eprintln!("Error writing CSV header: {:?}", error);
        return;
    }

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                eprintln!("Error reading directory entry: {:?}", error);
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        let ext = file_ext(&name);
        if tables::is_denylisted(ext) {
            continue;
        }

        let contents = match fs::read(&path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).to_string(),
            Err(error) => {
                eprintln!("Error reading file {:?}: {:?}", path, error);
                continue;
            }
        };

        let file_type = board_file_type(&contents);
        let assignment = determine_side_and_layer(&name);

        let record = [
            name.clone(),
            ext.to_string(),
            format!("{:?}", file_type),
            format!("{:?}", assignment.side),
            format!("{:?}", assignment.layer),
        ];
        if let Err(error) = writer.write_record(&record) {
            eprintln!("Error writing CSV record for {:?}: {:?}", name, error);
            return;
        }
    }

    if let Err(error) = writer.flush() {
        eprintln!("Error flushing CSV output: {:?}", error);
    }
}

// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/tables.rs - Static classification tables for fabrication files.
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

/*!
 * # `tables` Module
 *
 * Static domain data for the classifier: the extension dispatch table, the
 * generic-extension group with its base-name and name-marker tables, the
 * descriptor fallback table, and the denylist of extensions that never hold
 * fabrication data.
 *
 * All tables are `'static` and immutable, so they are safe to consult from
 * any number of threads without coordination. Entries are stored lower-case;
 * the lookup helpers fold case where the table contract requires it.
 */

use crate::classifier::{BoardLayer, BoardSide, LayerAssignment};

const TOP_COPPER: LayerAssignment = LayerAssignment::new(BoardSide::Top, BoardLayer::Copper);
const BOTTOM_COPPER: LayerAssignment = LayerAssignment::new(BoardSide::Bottom, BoardLayer::Copper);
const INNER_COPPER: LayerAssignment = LayerAssignment::new(BoardSide::Internal, BoardLayer::Copper);
const TOP_MASK: LayerAssignment = LayerAssignment::new(BoardSide::Top, BoardLayer::SolderMask);
const BOTTOM_MASK: LayerAssignment =
    LayerAssignment::new(BoardSide::Bottom, BoardLayer::SolderMask);
const TOP_SILK: LayerAssignment = LayerAssignment::new(BoardSide::Top, BoardLayer::Silk);
const BOTTOM_SILK: LayerAssignment = LayerAssignment::new(BoardSide::Bottom, BoardLayer::Silk);
const TOP_PASTE: LayerAssignment = LayerAssignment::new(BoardSide::Top, BoardLayer::Paste);
const BOTTOM_PASTE: LayerAssignment = LayerAssignment::new(BoardSide::Bottom, BoardLayer::Paste);
const BOTH_PASTE: LayerAssignment = LayerAssignment::new(BoardSide::Both, BoardLayer::Paste);
const TOP_ASSEMBLY: LayerAssignment = LayerAssignment::new(BoardSide::Top, BoardLayer::Assembly);
const BOTTOM_ASSEMBLY: LayerAssignment =
    LayerAssignment::new(BoardSide::Bottom, BoardLayer::Assembly);
const BOTH_ASSEMBLY: LayerAssignment = LayerAssignment::new(BoardSide::Both, BoardLayer::Assembly);
const BOTH_OUTLINE: LayerAssignment = LayerAssignment::new(BoardSide::Both, BoardLayer::Outline);
const BOTH_DRILL: LayerAssignment = LayerAssignment::new(BoardSide::Both, BoardLayer::Drill);
const BOTH_MILL: LayerAssignment = LayerAssignment::new(BoardSide::Both, BoardLayer::Mill);
const BOTH_MECHANICAL: LayerAssignment =
    LayerAssignment::new(BoardSide::Both, BoardLayer::Mechanical);

/// Extension dispatch table: specific, vendor-assigned file extensions and
/// the side/layer they identify.
///
/// Keys are lower-case and looked up with [lookup_extension]. When the same
/// extension appears more than once, the last entry wins.
pub static EXTENSION_TABLE: &[(&str, LayerAssignment)] = &[
    // Protel/Altium layer codes
    ("gtl", TOP_COPPER),
    ("gbl", BOTTOM_COPPER),
    ("gts", TOP_MASK),
    ("gbs", BOTTOM_MASK),
    ("gto", TOP_SILK),
    ("gbo", BOTTOM_SILK),
    ("gtp", TOP_PASTE),
    ("gbp", BOTTOM_PASTE),
    ("gko", BOTH_OUTLINE),
    ("gmb", BOTH_OUTLINE),
    ("gml", BOTH_MILL),
    // Altium mechanical layers 1-20
    ("gm1", BOTH_MECHANICAL),
    ("gm2", BOTH_MECHANICAL),
    ("gm3", BOTH_MECHANICAL),
    ("gm4", BOTH_MECHANICAL),
    ("gm5", BOTH_MECHANICAL),
    ("gm6", BOTH_MECHANICAL),
    ("gm7", BOTH_MECHANICAL),
    ("gm8", BOTH_MECHANICAL),
    ("gm9", BOTH_MECHANICAL),
    ("gm10", BOTH_MECHANICAL),
    ("gm11", BOTH_MECHANICAL),
    ("gm12", BOTH_MECHANICAL),
    ("gm13", BOTH_MECHANICAL),
    ("gm14", BOTH_MECHANICAL),
    ("gm15", BOTH_MECHANICAL),
    ("gm16", BOTH_MECHANICAL),
    ("gm17", BOTH_MECHANICAL),
    ("gm18", BOTH_MECHANICAL),
    ("gm19", BOTH_MECHANICAL),
    ("gm20", BOTH_MECHANICAL),
    // Altium/Protel inner signal and plane layers
    ("g1", INNER_COPPER),
    ("g2", INNER_COPPER),
    ("g3", INNER_COPPER),
    ("g4", INNER_COPPER),
    ("gl1", INNER_COPPER),
    ("gl2", INNER_COPPER),
    ("gl3", INNER_COPPER),
    ("gl4", INNER_COPPER),
    ("gp1", INNER_COPPER),
    ("gp2", INNER_COPPER),
    ("gp3", INNER_COPPER),
    ("gp4", INNER_COPPER),
    ("l2", INNER_COPPER),
    ("l3", INNER_COPPER),
    ("l4", INNER_COPPER),
    ("l5", INNER_COPPER),
    ("in1", INNER_COPPER),
    ("in2", INNER_COPPER),
    ("in3", INNER_COPPER),
    ("in4", INNER_COPPER),
    // Eagle CAM job extensions
    ("cmp", TOP_COPPER),
    ("sol", BOTTOM_COPPER),
    ("stc", TOP_MASK),
    ("sts", BOTTOM_MASK),
    ("plc", TOP_SILK),
    ("pls", BOTTOM_SILK),
    ("crc", TOP_PASTE),
    ("crs", BOTTOM_PASTE),
    ("dim", BOTH_OUTLINE),
    ("drd", BOTH_DRILL),
    // OrCAD-style layer extensions
    ("top", TOP_COPPER),
    ("bot", BOTTOM_COPPER),
    ("smt", TOP_MASK),
    ("smb", BOTTOM_MASK),
    ("sst", TOP_SILK),
    ("ssb", BOTTOM_SILK),
    ("spt", TOP_PASTE),
    ("spb", BOTTOM_PASTE),
    ("ast", TOP_ASSEMBLY),
    ("asb", BOTTOM_ASSEMBLY),
    // Drill file extensions
    ("drl", BOTH_DRILL),
    ("xln", BOTH_DRILL),
    ("drill", BOTH_DRILL),
    ("drillnpt", BOTH_DRILL),
    ("exc", BOTH_DRILL),
    ("ncd", BOTH_DRILL),
    ("tap", BOTH_DRILL),
    // Board outline extensions
    ("fabrd", BOTH_OUTLINE),
    ("oln", BOTH_OUTLINE),
    ("outline", BOTH_OUTLINE),
];

/// Generic Gerber extensions that carry no layer information of their own.
/// Files with these extensions are classified from the rest of the name.
pub static GENERIC_GERBER_EXTENSIONS: &[&str] = &["gbr", "grb", "ger", "art"];

/// Base-name dispatch for files with a generic Gerber extension. Keys match
/// the whole base name (the part of the file name before the first `.`).
pub static GENERIC_BASE_NAMES: &[(&str, LayerAssignment)] = &[
    ("boardoutline", BOTH_OUTLINE),
    ("outline", BOTH_OUTLINE),
    ("board", BOTH_OUTLINE),
    ("bottom", BOTTOM_COPPER),
    ("bottommask", BOTTOM_MASK),
    ("bottompaste", BOTTOM_PASTE),
    ("bottomsilk", BOTTOM_SILK),
    ("top", TOP_COPPER),
    ("topmask", TOP_MASK),
    ("toppaste", TOP_PASTE),
    ("topsilk", TOP_SILK),
    ("inner1", INNER_COPPER),
    ("inner2", INNER_COPPER),
];

/// Name markers for files with a generic Gerber extension, checked against
/// the full lower-cased file name. Order matters: the first marker found
/// wins. The `-f_*`/`-b_*` entries are KiCad plot suffixes, `_lyr1`-`_lyr8`
/// are inner-layer suffixes, and the rest come from assorted CAM job
/// templates.
pub static GENERIC_NAME_MARKERS: &[(&str, LayerAssignment)] = &[
    ("outline", BOTH_OUTLINE),
    ("-edge_cuts", BOTH_OUTLINE),
    ("-b_cu", BOTTOM_COPPER),
    ("-f_cu", TOP_COPPER),
    ("-b_silks", BOTTOM_SILK),
    ("-f_silks", TOP_SILK),
    ("-b_mask", BOTTOM_MASK),
    ("-f_mask", TOP_MASK),
    ("-b_paste", BOTTOM_PASTE),
    ("-f_paste", TOP_PASTE),
    ("_fab", BOTH_ASSEMBLY),
    ("_bslk", BOTTOM_SILK),
    ("_tslk", TOP_SILK),
    ("_smc", TOP_MASK),
    ("_sms", BOTTOM_MASK),
    ("_spc", TOP_PASTE),
    ("_sps", BOTTOM_PASTE),
    ("_lyr1", INNER_COPPER),
    ("_lyr2", INNER_COPPER),
    ("_lyr3", INNER_COPPER),
    ("_lyr4", INNER_COPPER),
    ("_lyr5", INNER_COPPER),
    ("_lyr6", INNER_COPPER),
    ("_lyr7", INNER_COPPER),
    ("_lyr8", INNER_COPPER),
];

/// Assembly-layer keywords for the keyword-scoring stage.
///
/// These are mixed-case but are matched against an already lower-cased file
/// name, so none of them can currently hit. Kept verbatim until it is decided
/// whether matching them case-insensitively would misclassify existing
/// uploads.
pub static ASSEMBLY_KEYWORDS: &[&str] = &["Asm", "Assm", "Assy", "Assem"];

/// Descriptor fallback table: dotted name fragments emitted by CAM jobs that
/// embed the layer description in the file name (`project.toplayer.pho` and
/// friends). Checked against the full lower-cased file name; the first
/// fragment found, in table order, wins.
pub static DESCRIPTOR_TABLE: &[(&str, LayerAssignment)] = &[
    (".topsoldermask", TOP_MASK),
    (".topsilkscreen", TOP_SILK),
    (".toplayer", TOP_COPPER),
    (".tcream", TOP_PASTE),
    (".boardoutline", BOTH_OUTLINE),
    (".bcream", BOTTOM_PASTE),
    (".bottomsoldermask", BOTTOM_MASK),
    (".bottomsilkscreen", BOTTOM_SILK),
    (".bottomlayer", BOTTOM_COPPER),
    (".internalplane1", INNER_COPPER),
    (".internalplane2", INNER_COPPER),
    // Duplicate entry, shadowed by the ".bcream" above; the first match wins.
    (".bcream", BOTH_PASTE),
];

/// File extensions that never hold fabrication data. Callers use this to
/// filter uploads before attempting classification. All entries are stored
/// lower-case; [is_denylisted] folds case before testing membership.
pub static DENYLISTED_EXTENSIONS: &[&str] = &[
    // Source code
    "asm", "bat", "c", "cc", "cmd", "cpp", "cs", "css", "cxx", "go", "h", "hpp", "java", "js",
    "kt", "lua", "m", "php", "pl", "ps1", "py", "rb", "rs", "s", "sh", "swift", "ts", "vb",
    // Build and IDE project files
    "cmake", "csproj", "gradle", "mk", "sln", "suo", "user", "vcxproj",
    // Documents
    "chm", "doc", "docx", "htm", "html", "md", "odt", "pdf", "ppt", "pptx", "rtf", "tex", "xls",
    "xlsx",
    // Configuration and data
    "cfg", "conf", "db", "ini", "json", "log", "sql", "sqlite", "toml", "yaml", "yml",
    // Images
    "ai", "bmp", "gif", "ico", "jpeg", "jpg", "png", "psd", "svg", "tif", "tiff", "webp",
    // Audio and video
    "avi", "mp3", "mp4", "wav",
    // Archives
    "7z", "bz2", "gz", "rar", "tar", "tgz", "xz", "zip",
    // Compiled artifacts
    "a", "class", "dll", "dylib", "exe", "jar", "o", "obj", "pdb", "pyc", "so",
    // VCS and OS metadata
    "bak", "ds_store", "gitattributes", "gitignore", "gitmodules", "lnk", "old", "swp", "tmp",
    "url",
    // EDA project, library, and mechanical exchange files
    "brd", "dcm", "dsn", "epf", "fcstd", "kicad_mod", "kicad_pcb", "kicad_prl", "kicad_pro",
    "kicad_sch", "kicad_wks", "lbr", "lib", "mod", "net", "outjob", "pcbdoc", "pcblib", "prjpcb",
    "pro", "sch", "schdoc", "schlib", "ses", "step", "stl", "stp", "wrl",
];

/// Looks up a lower-case extension in [EXTENSION_TABLE].
///
/// The table is scanned back to front so that a duplicated key resolves to
/// its last entry.
pub fn lookup_extension(ext: &str) -> Option<LayerAssignment> {
    EXTENSION_TABLE
        .iter()
        .rev()
        .find(|(key, _)| *key == ext)
        .map(|(_, assignment)| *assignment)
}

/// Returns whether an extension (without the leading dot, any case) is on
/// the denylist of never-fabrication formats.
pub fn is_denylisted(ext: &str) -> bool {
    let ext = ext.to_lowercase();
    DENYLISTED_EXTENSIONS.iter().any(|entry| *entry == ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_extensions() {
        assert_eq!(lookup_extension("gtl"), Some(TOP_COPPER));
        assert_eq!(lookup_extension("gbs"), Some(BOTTOM_MASK));
        assert_eq!(lookup_extension("drl"), Some(BOTH_DRILL));
        assert_eq!(lookup_extension("gml"), Some(BOTH_MILL));
        assert_eq!(lookup_extension("crs"), Some(BOTTOM_PASTE));
    }

    #[test]
    fn test_lookup_unknown_extension() {
        assert_eq!(lookup_extension("xyz"), None);
        assert_eq!(lookup_extension(""), None);
    }

    #[test]
    fn test_lookup_is_exact_not_substring() {
        assert_eq!(lookup_extension("gtl2"), None);
        assert_eq!(lookup_extension("gt"), None);
    }

    #[test]
    fn test_mechanical_layer_family() {
        for n in 1..=20 {
            let ext = format!("gm{}", n);
            assert_eq!(lookup_extension(&ext), Some(BOTH_MECHANICAL), "{}", ext);
        }
        assert_eq!(lookup_extension("gm21"), None);
    }

    #[test]
    fn test_lookup_takes_last_entry_for_duplicate_keys() {
        let first = EXTENSION_TABLE
            .iter()
            .find(|(key, _)| *key == "gtl")
            .map(|(_, assignment)| *assignment);
        assert_eq!(lookup_extension("gtl"), first);

        // The descriptor table goes the other way: first entry wins there,
        // which is what keeps the duplicated ".bcream" shadowed.
        let bcream = DESCRIPTOR_TABLE
            .iter()
            .find(|(fragment, _)| *fragment == ".bcream")
            .map(|(_, assignment)| *assignment);
        assert_eq!(bcream, Some(BOTTOM_PASTE));
    }

    #[test]
    fn test_denylist_membership() {
        assert!(is_denylisted("png"));
        assert!(is_denylisted("gitignore"));
        assert!(is_denylisted("kicad_pcb"));
        assert!(!is_denylisted("gtl"));
        assert!(!is_denylisted("gbr"));
        assert!(!is_denylisted(""));
    }

    #[test]
    fn test_denylist_is_case_insensitive() {
        assert!(is_denylisted("PNG"));
        assert!(is_denylisted("PcbDoc"));
    }

    #[test]
    fn test_denylist_entries_are_lower_case() {
        for entry in DENYLISTED_EXTENSIONS {
            assert_eq!(*entry, entry.to_lowercase().as_str());
        }
    }

    #[test]
    fn test_classified_extensions_are_not_denylisted() {
        for (ext, _) in EXTENSION_TABLE {
            assert!(!is_denylisted(ext), "{}", ext);
        }
        for ext in GENERIC_GERBER_EXTENSIONS {
            assert!(!is_denylisted(ext), "{}", ext);
        }
    }
}

use std::path::Path;

use lewis_layout::io::Format;

fn extension(path: &Path) -> Option<String> {
    Some(path.extension()?.to_str()?.to_lowercase())
}

pub fn input(path: &Path) -> Option<Format> {
    match extension(path)?.as_str() {
        "sdf" | "sd" | "mol" => Some(Format::Sdf),
        _ => None,
    }
}

pub fn output(path: &Path) -> Option<Format> {
    match extension(path)?.as_str() {
        "svg" => Some(Format::Svg),
        _ => None,
    }
}

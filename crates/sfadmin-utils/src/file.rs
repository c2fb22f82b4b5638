//! File-type icon mapping based on the filename extension
//!
//! Icon names match the SVG sprite ids shipped with the dashboard
//! (`file-type-pdf`, `file-type-img`, ...).

use std::fmt;

/// Icon category for an uploaded or listed file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileIcon {
    Img,
    Txt,
    Docx,
    Excel,
    Pdf,
    Ppt,
    Zip,
    Video,
    Music,
    Code,
    Unknown,
}

impl FileIcon {
    /// Classify a bare extension (no leading dot), ignoring case
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "png" | "jpg" | "jpeg" | "ico" | "gif" | "bmp" | "webp" => FileIcon::Img,
            "markdown" | "md" | "txt" => FileIcon::Txt,
            "docx" | "doc" | "docm" | "dot" | "dotx" => FileIcon::Docx,
            "csv" | "xls" | "xlsb" | "xlsm" | "xlsx" | "xltx" => FileIcon::Excel,
            "pdf" => FileIcon::Pdf,
            "pptx" | "ppt" | "pptm" => FileIcon::Ppt,
            "zip" | "rar" | "7z" | "tar" | "gz" | "tgz" => FileIcon::Zip,
            "mp4" | "avi" | "wmv" | "rmvb" | "3gp" | "mov" | "m4v" | "flv" | "mkv" => {
                FileIcon::Video
            }
            "mp3" | "wav" => FileIcon::Music,
            "vue" | "js" | "go" | "java" | "ts" | "css" | "html" | "php" | "c" | "cpp"
            | "swift" | "kt" => FileIcon::Code,
            _ => FileIcon::Unknown,
        }
    }

    /// Classify a filename by its last extension
    pub fn from_file_name(file_name: &str) -> Self {
        file_extension(file_name)
            .map(Self::from_extension)
            .unwrap_or(FileIcon::Unknown)
    }

    /// Sprite id for this icon
    pub fn as_str(self) -> &'static str {
        match self {
            FileIcon::Img => "file-type-img",
            FileIcon::Txt => "file-type-txt",
            FileIcon::Docx => "file-type-docx",
            FileIcon::Excel => "file-type-excel",
            FileIcon::Pdf => "file-type-pdf",
            FileIcon::Ppt => "file-type-ppt",
            FileIcon::Zip => "file-type-zip",
            FileIcon::Video => "file-type-video",
            FileIcon::Music => "file-type-music",
            FileIcon::Code => "file-type-code",
            FileIcon::Unknown => "file-type-unknown",
        }
    }
}

impl fmt::Display for FileIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the text after the last `.`, or `None` when there is no extension
///
/// The name is not treated as a path: `"dir.v1/file"` yields `"v1/file"`.
///
/// # Examples
///
/// ```
/// use sfadmin_utils::file_extension;
///
/// assert_eq!(file_extension("a.b.tar.gz"), Some("gz"));
/// assert_eq!(file_extension("noext"), None);
/// ```
pub fn file_extension(filename: &str) -> Option<&str> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

/// Sprite id for a filename; empty names and missing extensions are unknown
pub fn icon_name_for(file_name: &str) -> &'static str {
    FileIcon::from_file_name(file_name).as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("a.b.tar.gz"), Some("gz"));
        assert_eq!(file_extension("noext"), None);
        assert_eq!(file_extension(".bashrc"), Some("bashrc"));
        assert_eq!(file_extension("trailing."), None);
        assert_eq!(file_extension(""), None);
    }

    #[rstest]
    #[case("report.pdf", "file-type-pdf")]
    #[case("", "file-type-unknown")]
    #[case("README", "file-type-unknown")]
    #[case("photo.JPEG", "file-type-img")]
    #[case("notes.md", "file-type-txt")]
    #[case("contract.docx", "file-type-docx")]
    #[case("data.csv", "file-type-excel")]
    #[case("deck.pptm", "file-type-ppt")]
    #[case("backup.tar.gz", "file-type-zip")]
    #[case("clip.mkv", "file-type-video")]
    #[case("song.wav", "file-type-music")]
    #[case("App.vue", "file-type-code")]
    #[case("archive.xyz", "file-type-unknown")]
    fn test_icon_name_for(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(icon_name_for(name), expected);
    }

    #[test]
    fn test_display_matches_sprite_id() {
        assert_eq!(FileIcon::Excel.to_string(), "file-type-excel");
        assert_eq!(FileIcon::from_extension("KT"), FileIcon::Code);
    }
}

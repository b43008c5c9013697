use imagesize::ImageType;

/// Image formats the harness reports on the wire. Anything else a sniffer
/// might recognize is collapsed to `Unknown` so the label set stays closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Gif,
    Webp,
    Bmp,
    Tiff,
    Heif,
    Ico,
    Unknown,
}

impl ImageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageKind::Jpeg => "jpeg",
            ImageKind::Png => "png",
            ImageKind::Gif => "gif",
            ImageKind::Webp => "webp",
            ImageKind::Bmp => "bmp",
            ImageKind::Tiff => "tiff",
            ImageKind::Heif => "heif",
            ImageKind::Ico => "ico",
            ImageKind::Unknown => "unknown",
        }
    }
}

/// Best-effort classification of a response body. Dimensions are either
/// both real pixel counts or both `-1`; one-sided values never occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMetadata {
    pub kind: ImageKind,
    pub width: i64,
    pub height: i64,
}

impl ImageMetadata {
    pub fn unknown() -> Self {
        ImageMetadata {
            kind: ImageKind::Unknown,
            width: -1,
            height: -1,
        }
    }
}

/// Capability seam for body classification so tests can substitute a stub
/// without real image parsing. Implementations must be pure functions of
/// the byte buffer and must never fail.
pub trait ImageInspector {
    fn inspect(&self, bytes: &[u8]) -> ImageMetadata;
}

/// Production inspector: sniffs the format from magic numbers and reads
/// dimensions from the container header, ignoring any HTTP `Content-Type`.
pub struct SniffInspector;

impl ImageInspector for SniffInspector {
    fn inspect(&self, bytes: &[u8]) -> ImageMetadata {
        let kind = match imagesize::image_type(bytes) {
            Ok(sniffed) => sniff_to_kind(sniffed),
            Err(_) => return ImageMetadata::unknown(),
        };
        if kind == ImageKind::Unknown {
            return ImageMetadata::unknown();
        }
        // A recognized container with a damaged or truncated dimension
        // header keeps its sniffed kind but reports sentinel dimensions.
        match imagesize::blob_size(bytes) {
            Ok(size) => ImageMetadata {
                kind,
                width: size.width as i64,
                height: size.height as i64,
            },
            Err(_) => ImageMetadata {
                kind,
                ..ImageMetadata::unknown()
            },
        }
    }
}

fn sniff_to_kind(sniffed: ImageType) -> ImageKind {
    match sniffed {
        ImageType::Jpeg => ImageKind::Jpeg,
        ImageType::Png => ImageKind::Png,
        ImageType::Gif => ImageKind::Gif,
        ImageType::Webp => ImageKind::Webp,
        ImageType::Bmp => ImageKind::Bmp,
        ImageType::Tiff => ImageKind::Tiff,
        ImageType::Heif => ImageKind::Heif,
        ImageType::Ico => ImageKind::Ico,
        _ => ImageKind::Unknown,
    }
}

use crate::core::geo::TileCoord;

/// Trait representing anything that can act as the base tile layer:
/// producing tile URLs for a given coordinate, plus the attribution the
/// rendering surface must display.
///
/// URL production is aimed at tile-fetching backends; the bundled egui
/// widget paints a flat base layer and only consumes the attribution.
pub trait TileSource: Send + Sync {
    /// Build a URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> String;

    /// Attribution text for the surface's corner overlay.
    fn attribution(&self) -> &str {
        ""
    }
}

/// Simple implementation that hits the default OpenStreetMap tile server.
pub struct OpenStreetMapSource {
    subdomains: Vec<&'static str>,
}

impl OpenStreetMapSource {
    pub fn new() -> Self {
        Self {
            subdomains: vec!["a", "b", "c"],
        }
    }
}

impl Default for OpenStreetMapSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TileSource for OpenStreetMapSource {
    fn url(&self, coord: TileCoord) -> String {
        // Guard against empty subdomain list (should not happen, but be safe)
        if self.subdomains.is_empty() {
            return format!(
                "https://tile.openstreetmap.org/{}/{}/{}.png",
                coord.z, coord.x, coord.y
            );
        }

        let idx = ((coord.x + coord.y) % self.subdomains.len() as u32) as usize;
        let sub = self.subdomains[idx];
        format!(
            "https://{}.tile.openstreetmap.org/{}/{}/{}.png",
            sub, coord.z, coord.x, coord.y
        )
    }

    fn attribution(&self) -> &str {
        "© OpenStreetMap contributors"
    }
}

//! The fixed set of images the site needs.
//!
//! Each entry maps 1:1 to an output artifact `{identifier}.webp`.

/// One remote image to fetch. Immutable; the label is for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSpec {
    /// Photo identifier on the image host; also the output file stem.
    pub id: &'static str,
    /// Width requested from the host (`w` query parameter).
    pub width: u32,
    /// Human-readable description.
    pub label: &'static str,
}

const fn spec(id: &'static str, width: u32, label: &'static str) -> ImageSpec {
    ImageSpec { id, width, label }
}

/// All images, in processing order.
pub const IMAGES: [ImageSpec; 29] = [
    spec("photo-1503387762-592deb58ef4e", 1920, "Architect reviewing building plans"),
    spec("photo-1600607687939-ce8a6c25118c", 1920, "HERO IMAGE - Modern interior living room"),
    spec("photo-1566073771259-6a8506099945", 1920, "Contemporary interior design"),
    spec("photo-1486406146926-c627a92ad1ab", 1920, "Modern office building"),
    spec("photo-1524813686514-a57563d77965", 1920, "Minimalist interior"),
    spec("photo-1556911220-bff31c812dba", 1920, "Modern kitchen design"),
    spec("photo-1618221195710-dd6b41faaea6", 1920, "Interior design with plants"),
    spec("photo-1616486338812-3dadae4b4ace", 1920, "Contemporary living space"),
    spec("photo-1541888946425-d81bb19240f5", 1920, "Construction site"),
    spec("photo-1558904541-efa843a96f01", 1200, "Service image"),
    spec("photo-1600210492486-724fe5c67fb0", 1200, "Floor to ceiling windows"),
    spec("photo-1586023492125-27b2c045efd7", 1200, "Neutral color interior"),
    spec("photo-1556912167-f556f1f39faa", 1200, "Multi-functional space"),
    spec("photo-1615873968403-89e068629265", 1200, "Modern flooring"),
    spec("photo-1513519245088-0e12902e35ca", 1200, "Statement wall art"),
    spec("photo-1505693416388-ac5ce068fe85", 1200, "Cozy reading nook"),
    spec("photo-1558002038-1055907df827", 1200, "Smart home technology"),
    spec("photo-1463320726281-696a485928c7", 1200, "Indoor plants biophilic"),
    spec("photo-1554224311-beee4f201d8d", 800, "Interior designer portfolio"),
    spec("photo-1560518883-ce09059eeffa", 1920, "Luxury interior"),
    spec("photo-1454165804606-c3d57bc86b40", 1200, "Budget planning"),
    spec("photo-1552321554-5fefe8c9ef14", 1200, "Modern bathroom"),
    spec("photo-1460472178825-e5240623afd5", 1200, "Design factors"),
    spec("photo-1523726491678-bf852e717f6a", 1200, "Cost analysis"),
    spec("photo-1554224155-6726b3ff858f", 1200, "Budget strategies"),
    spec("photo-1600880292203-757bb62b4baf", 1200, "Professional team"),
    spec("photo-1553877522-43269d4ea984", 1200, "Design consultation"),
    spec("photo-1423666639041-f56000c27a9a", 1920, "Modern architecture"),
    spec("photo-1507003211169-0a1dd7228f2d", 1920, "Professional portrait"),
];

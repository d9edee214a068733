use super::NewPackage;

/// Source of the records loaded into an empty store at startup.
pub trait SeedData: Send + Sync {
    fn packages(&self) -> Vec<NewPackage>;
}

/// The ten demo packages the catalog ships with
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleCatalog;

impl SampleCatalog {
    pub const LEN: usize = 10;
}

impl SeedData for SampleCatalog {
    fn packages(&self) -> Vec<NewPackage> {
        vec![
            NewPackage::new(
                "Cancún, México",
                "7 días",
                1200.0,
                "Disfruta de playas paradisíacas y ruinas mayas.",
            ),
            NewPackage::new(
                "Machu Picchu, Perú",
                "5 días",
                850.0,
                "Explora la ciudad perdida de los Incas en los Andes.",
            ),
            NewPackage::new(
                "Roma, Italia",
                "10 días",
                1500.0,
                "Descubre la historia y cultura de la antigua Roma.",
            ),
            NewPackage::new(
                "París, Francia",
                "5 días",
                1300.0,
                "Romance y cultura en la ciudad de la luz.",
            ),
            NewPackage::new(
                "Tokio, Japón",
                "8 días",
                2100.0,
                "Experimenta la mezcla de tradición y modernidad.",
            ),
            NewPackage::new(
                "Nueva York, USA",
                "6 días",
                1700.0,
                "La ciudad que nunca duerme.",
            ),
            NewPackage::new(
                "Londres, Inglaterra",
                "7 días",
                1450.0,
                "Historia y cultura en la capital británica.",
            ),
            NewPackage::new(
                "Río de Janeiro, Brasil",
                "5 días",
                900.0,
                "Playas, carnaval y el Cristo Redentor.",
            ),
            NewPackage::new(
                "Buenos Aires, Argentina",
                "4 días",
                550.0,
                "Tango, gastronomía y cultura porteña.",
            ),
            NewPackage::new(
                "Madrid, España",
                "6 días",
                1100.0,
                "Arte, historia y vida nocturna.",
            ),
        ]
    }
}

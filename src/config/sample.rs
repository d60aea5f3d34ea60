/// One product of the built-in sample catalog.
pub struct SampleSku {
    pub id: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub variations: &'static [SampleVariation],
}

/// A purchasable option with the parameters of its synthetic history.
pub struct SampleVariation {
    pub name: &'static str,
    pub start_stock: i64,
    /// Average stock change per day (negative = selling)
    pub daily_change: f64,
}

pub struct SampleConfig {
    /// Days of history generated per variation
    pub days: i64,
    /// Half-width of the uniform noise added to each reading
    pub noise_amplitude: f64,
    pub skus: &'static [SampleSku],
}

pub const SAMPLE: SampleConfig = SampleConfig {
    days: 7,
    noise_amplitude: 5.0,
    skus: &[
        SampleSku {
            id: "TS-BL-01",
            name: "Camiseta Básica de Algodão",
            url: "https://www.google.com/search?q=Camiseta+Básica+de+Algodão",
            variations: &[
                SampleVariation { name: "Azul - P", start_stock: 150, daily_change: -2.5 },
                SampleVariation { name: "Azul - M", start_stock: 200, daily_change: -3.0 },
                SampleVariation { name: "Preto - M", start_stock: 180, daily_change: -1.5 },
                SampleVariation { name: "Branco - G", start_stock: 120, daily_change: -0.5 },
            ],
        },
        SampleSku {
            id: "CL-DN-05",
            name: "Calça Jeans Slim Fit",
            url: "https://www.google.com/search?q=Calça+Jeans+Slim+Fit",
            variations: &[
                SampleVariation { name: "Azul Escuro - 40", start_stock: 80, daily_change: -1.0 },
                SampleVariation { name: "Preto - 42", start_stock: 95, daily_change: -1.8 },
            ],
        },
        SampleSku {
            id: "SH-SN-12",
            name: "Tênis Esportivo Performance",
            url: "https://www.google.com/search?q=Tênis+Esportivo+Performance",
            variations: &[
                SampleVariation { name: "Branco/Vermelho - 41", start_stock: 50, daily_change: -0.8 },
                SampleVariation { name: "Preto/Cinza - 42", start_stock: 65, daily_change: -1.2 },
                SampleVariation { name: "Azul Marinho - 40", start_stock: 30, daily_change: -0.2 },
            ],
        },
    ],
};

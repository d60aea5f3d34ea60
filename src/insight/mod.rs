mod client;
mod prompt;

pub use client::InsightClient;
pub use prompt::build_insight_prompt;

/// Shown in place of the analysis when the generation call fails for any
/// reason. The rest of the UI is unaffected.
pub const ANALYSIS_FALLBACK_TEXT: &str =
    "Falha ao gerar a análise de IA. Verifique sua chave de API e a configuração no painel.";

use serde::Serialize;

use crate::config::INSIGHT;
use crate::domain::{HistoryEntry, Variation};
use crate::utils::time_utils;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VariationSample {
    name: String,
    history_sample: Vec<SampleEntry>,
    record_count: usize,
}

#[derive(Serialize)]
struct SampleEntry {
    timestamp: String,
    stock: i64,
}

/// Keep the outbound payload small: the first and last `sample_edge`
/// readings of each variation, with human-readable dates.
fn sample_history(history: &[HistoryEntry]) -> Vec<SampleEntry> {
    let edge = INSIGHT.sample_edge;

    let picked: Vec<&HistoryEntry> = if history.len() <= edge * 2 {
        history.iter().collect()
    } else {
        history[..edge]
            .iter()
            .chain(history[history.len() - edge..].iter())
            .collect()
    };

    picked
        .into_iter()
        .map(|h| SampleEntry {
            timestamp: time_utils::epoch_ms_to_br_date(h.timestamp_ms),
            stock: h.stock,
        })
        .collect()
}

/// Compose the fixed pt-BR analysis request for one product.
pub fn build_insight_prompt(sku_name: &str, variations: &[Variation]) -> String {
    let data_sample: Vec<VariationSample> = variations
        .iter()
        .map(|v| VariationSample {
            name: v.name.clone(),
            history_sample: sample_history(&v.history),
            record_count: v.history.len(),
        })
        .collect();

    let json = serde_json::to_string_pretty(&data_sample).unwrap_or_else(|_| "[]".to_string());

    format!(
        r#"**Análise de Desempenho de SKU para Gerente de Estoque**

**Produto:** {sku_name}

**Dados:** A seguir estão amostras do histórico de estoque para cada variação deste produto. Os dados mostram o estoque no início e no fim do período analisado.

```json
{json}
```

**Sua Tarefa:**
Você é um especialista em análise de varejo. Com base nos dados, forneça uma análise concisa em português do Brasil (usando markdown) incluindo:
1. **Resumo Geral:** Qual a tendência geral de vendas do produto (a julgar pela queda de estoque)?
2. **Análise Comparativa:** Qual variação teve a maior queda de estoque (mais vendida)? Existe alguma variação com desempenho muito diferente das outras?
3. **Insights Estratégicos:** Aponte destaques (ex: "A variação X é a campeã de vendas") e sugira uma ação clara e objetiva (ex: "Priorizar reabastecimento da variação Y" ou "Considerar uma promoção para a variação Z que está parada").
4. **Conclusão:** Um resumo final sobre a saúde do SKU.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::TimeUtils;

    const NOW_MS: i64 = 1_750_000_000_000;

    fn variation(reading_count: usize) -> Variation {
        let history: Vec<HistoryEntry> = (0..reading_count)
            .map(|i| HistoryEntry {
                timestamp_ms: NOW_MS - (reading_count - 1 - i) as i64 * TimeUtils::MS_IN_D,
                stock: 100 - i as i64,
            })
            .collect();

        Variation {
            name: "Azul - M".into(),
            current_stock: history.last().map(|h| h.stock).unwrap_or(0),
            delta: 0,
            history,
        }
    }

    #[test]
    fn long_histories_sample_both_edges() {
        let v = variation(10);
        let sampled = sample_history(&v.history);
        assert_eq!(sampled.len(), INSIGHT.sample_edge * 2);
        assert_eq!(sampled[0].stock, 100); // oldest reading kept
        assert_eq!(sampled.last().unwrap().stock, 91); // newest reading kept
    }

    #[test]
    fn short_histories_are_kept_whole() {
        let v = variation(4);
        assert_eq!(sample_history(&v.history).len(), 4);
    }

    #[test]
    fn prompt_embeds_product_and_sampled_json() {
        let prompt = build_insight_prompt("Camiseta Básica", &[variation(10)]);

        assert!(prompt.contains("**Produto:** Camiseta Básica"));
        assert!(prompt.contains("```json"));
        assert!(prompt.contains("\"recordCount\": 10"));
        assert!(prompt.contains("historySample"));
        assert!(prompt.contains("Resumo Geral"));
    }
}

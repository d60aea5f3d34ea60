/// Every user-facing string of the dashboard. The audience is Brazilian, so
/// the UI speaks pt-BR; logs stay in English.
pub struct UiText {
    pub app_title: &'static str,
    pub app_subtitle: &'static str,

    pub loading: &'static str,
    pub error_title: &'static str,
    pub fetch_failed: &'static str,
    pub alert_title: &'static str,
    pub alert_ok: &'static str,
    pub sample_badge: &'static str,

    pub period_label: &'static str,
    pub period_one_day: &'static str,
    pub period_seven_days: &'static str,

    pub col_product: &'static str,
    pub col_total_stock: &'static str,
    pub col_total_delta: &'static str,
    pub col_actions: &'static str,
    pub col_variation: &'static str,
    pub col_current_stock: &'static str,
    pub col_period_delta: &'static str,

    pub action_view: &'static str,
    pub action_view_hover: &'static str,
    pub action_analyze: &'static str,
    pub action_analyze_hover: &'static str,
    pub fav_on: &'static str,
    pub fav_off: &'static str,
    pub fav_hover: &'static str,

    pub sort_by: &'static str,
    pub empty_catalog: &'static str,

    pub modal_title_prefix: &'static str,
    pub generating_insights: &'static str,
    pub axis_date: &'static str,
    pub axis_stock: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Controle de Estoque",
    app_subtitle: "Monitore e analise o estoque de seus produtos com insights de IA.",

    loading: "Carregando dados...",
    error_title: "Erro!",
    fetch_failed: "Falha ao carregar os dados de estoque.",
    alert_title: "Aviso",
    alert_ok: "OK",
    sample_badge: "Dados de exemplo",

    period_label: "Analisar período:",
    period_one_day: "1 Dia",
    period_seven_days: "7 Dias",

    col_product: "Nome do Produto",
    col_total_stock: "Estoque Total",
    col_total_delta: "Variação Total",
    col_actions: "Ações",
    col_variation: "Variação",
    col_current_stock: "Estoque Atual",
    col_period_delta: "Variação no Período",

    action_view: "Ver",
    action_view_hover: "Ver Produto",
    action_analyze: "Analisar",
    action_analyze_hover: "Analisar SKU com IA",
    fav_on: "★",
    fav_off: "☆",
    fav_hover: "Favoritar",

    sort_by: "Ordenar por:",
    empty_catalog: "Nenhum produto encontrado.",

    modal_title_prefix: "Análise de IA:",
    generating_insights: "Gerando insights...",
    axis_date: "Data",
    axis_stock: "Estoque",
};

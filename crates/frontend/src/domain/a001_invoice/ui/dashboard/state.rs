/// Panel currently shown in the content area; exactly one is active
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActivePanel {
    #[default]
    Table,
    Chart,
    Expired,
    Form,
}

impl ActivePanel {
    /// Sidebar order
    pub fn all() -> [ActivePanel; 4] {
        [Self::Table, Self::Chart, Self::Expired, Self::Form]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Table => "Invoice Data",
            Self::Chart => "Invoice Price Trends",
            Self::Expired => "Expired Invoice Chart",
            Self::Form => "Add Invoice",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Chart => "bar-chart",
            Self::Expired => "alert",
            Self::Form => "plus",
        }
    }
}

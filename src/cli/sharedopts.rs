/// Optional gift record fields shared by `add` and `edit`.
#[derive(clap::Args)]
pub struct GiftOpts {
    /// Number of companions, 0 or more [default: 1]
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub companions: Option<String>,

    /// Relation to the guest
    ///
    /// One of friend, company, family, acquaintance, neighbor or other. When
    /// editing, 'none' clears the field.
    #[arg(short, long)]
    pub relation: Option<String>,

    /// Payment method
    ///
    /// One of cash, transfer, card, pay-app or other. When editing, 'none'
    /// clears the field.
    #[arg(short = 'p', long, value_name = "METHOD")]
    pub method: Option<String>,

    /// Side the guest belongs to
    ///
    /// Either bride or groom. When editing, 'none' clears the field.
    #[arg(short, long)]
    pub side: Option<String>,

    /// Free-form note
    ///
    /// When editing, 'none' clears the field.
    #[arg(short, long)]
    pub memo: Option<String>,
}

/// One row of the earnings-reaction commentary table
pub struct EarningsReaction {
    pub period: &'static str,
    pub reaction: &'static str,
    pub drivers: &'static str,
}

/// Every user-visible string, in one place
pub struct UiText {
    pub tab_trend: &'static str,
    pub tab_windows_prefix: &'static str,
    pub tab_windows_suffix: &'static str,
    pub tab_analysis: &'static str,

    pub trend_heading: &'static str,
    pub trend_line_name: &'static str,
    pub marker_name: &'static str,
    pub marker_notes: &'static [&'static str],

    pub returns_heading: &'static str,
    pub returns_start: &'static str,
    pub returns_end: &'static str,
    pub returns_total: &'static str,
    pub returns_simple: &'static str,
    pub returns_cagr: &'static str,

    pub yoy_heading: &'static str,
    pub yoy_columns: [&'static str; 4],

    pub windows_heading: &'static str,
    pub window_line_name: &'static str,
    pub window_marker_name: &'static str,
    pub window_prev: &'static str,
    pub window_next: &'static str,

    pub analysis_heading: &'static str,
    pub reactions_heading: &'static str,
    pub reaction_columns: [&'static str; 3],
    pub reactions: &'static [EarningsReaction],
    pub drivers_heading: &'static str,
    pub drivers: &'static [&'static str],

    pub error_heading: &'static str,
    pub error_hint: &'static str,
    pub unavailable: &'static str,
    pub status_observations: &'static str,
    pub status_coverage: &'static str,

    pub plot_x_axis: &'static str,
    pub plot_y_axis: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    tab_trend: "2-Week Close & Year-End Markers",
    tab_windows_prefix: "Year-End ±",
    tab_windows_suffix: " Day Zoom",
    tab_analysis: "Analysis",

    trend_heading: "Close (2W-FRI) with year-end markers",
    trend_line_name: "Close (2W-FRI)",
    marker_name: "Year-end marker",
    marker_notes: &[
        "Markers stand in for the annual earnings release of each year.",
        "Each marker is Dec 31 snapped to the nearest two-week bar, so it may not line up with the actual release date.",
    ],

    returns_heading: "Holding period return",
    returns_start: "Start close",
    returns_end: "End close",
    returns_total: "Total return",
    returns_simple: "Annual average (simple)",
    returns_cagr: "Annual average (CAGR)",

    yoy_heading: "Year-end close and YoY return",
    yoy_columns: ["Year", "close_ye", "prev_close_ye", "yoy_pct"],

    windows_heading: "Year-end zoom",
    window_line_name: "Close (Daily)",
    window_marker_name: "12-31 (snapped)",
    window_prev: "prev day",
    window_next: "next day",

    analysis_heading: "Analysis",
    reactions_heading: "Share price reaction after each annual earnings release",
    reaction_columns: ["Period", "Price reaction", "Main drivers"],
    reactions: &[
        EarningsReaction {
            period: "2021 Q4",
            reaction: "about -20%",
            drivers: "Subscriber growth slowdown, cautious guidance, weak tech sector",
        },
        EarningsReaction {
            period: "2022 Q4",
            reaction: "Mixed to negative",
            drivers: "Slowing revenue, sharp EPS drop",
        },
        EarningsReaction {
            period: "2023 Q4",
            reaction: "about +12%",
            drivers: "Subscriber surge, results above expectations",
        },
        EarningsReaction {
            period: "2024 Q4",
            reaction: "about +14%",
            drivers: "Record results, buybacks, raised guidance",
        },
    ],
    drivers_heading: "What moves the share price",
    drivers: &[
        "Paid subscriber growth",
        "Level of forward guidance",
        "Content strategy",
        "Advertising revenue and pricing tiers",
        "Profitability metrics such as EPS",
        "Global interest and exchange rates",
        "Competitor activity",
        "Share buyback policy",
    ],

    error_heading: "⚠ Unable to Load Price Data",
    error_hint: "Check the connection settings (--db-host, --db-port, DASHBOARD_DB_* variables) and restart.",
    unavailable: "n/a",
    status_observations: "Closes",
    status_coverage: "Coverage",

    plot_x_axis: "Date",
    plot_y_axis: "Close",
};

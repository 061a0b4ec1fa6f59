//! Builtin analysis templates.

use super::model::AnalysisTypeDescriptor;

pub static GLOBAL_ANALYSIS_TYPES: &[AnalysisTypeDescriptor] = &[
    AnalysisTypeDescriptor::new(
        "cross-domain",
        "Cross-Domain Correlation",
        "Correlation potential between weather, ocean and biology records",
        "You are an expert climate scientist analyzing historical and modern environmental data for the SYAN.EARTH platform. Analyze the correlation potential between the selected data sources.

Consider:
1. Temporal overlap between datasets
2. Geographic compatibility (UK, Ireland, North Atlantic)
3. Physical mechanisms linking the variables
4. Known climate teleconnections (AMO, NAO, etc.)
5. Statistical considerations for correlation analysis

Provide:
- Hypothesis for potential correlation
- Expected R-value range and confidence
- Recommended time period for analysis
- Key variables to examine
- Caveats and limitations",
    ),
    AnalysisTypeDescriptor::new(
        "bloom-prediction",
        "Bloom Prediction",
        "Leading indicators for harmful algal bloom forecasting",
        "You are analyzing climate data to improve harmful algal bloom (HAB) prediction models. Based on the selected datasets, identify:

1. Leading indicators for bloom events (SST thresholds, nutrient patterns)
2. Lag times between environmental triggers and bloom onset
3. Geographic hotspots where data coverage enables prediction
4. Historical bloom events in the data record
5. Integration pathway into SYAN.EARTH monitoring system",
    ),
    AnalysisTypeDescriptor::new(
        "trend-analysis",
        "Trend Analysis",
        "Long-term and decadal trends across the selected records",
        "Analyze long-term trends in the selected climate data sources. Focus on:

1. Decadal variability patterns
2. Acceleration/deceleration of trends since 1980
3. Comparison with IPCC AR6 regional projections
4. Implications for coastal communities and fisheries
5. Data gaps that limit trend confidence",
    ),
];

pub static TAMPA_BAY_ANALYSIS_TYPES: &[AnalysisTypeDescriptor] = &[
    AnalysisTypeDescriptor::new(
        "hab_prediction",
        "HAB Prediction Model",
        "Identify red tide triggers and forecast conditions",
        "Analyze the selected Tampa Bay data sources for HAB prediction capability.

Focus on:
1. Temperature thresholds that trigger Karenia brevis blooms (>28°C sustained?)
2. Nutrient loading patterns preceding bloom events
3. Wind direction and strength correlations with bloom intensification
4. Seasonal patterns - why are summer blooms (like 2021) unusual?
5. Lag times between environmental triggers and cell count increases
6. Specific predictions for Egmont Key, Fort De Soto, and Skyway Bridge areas",
    ),
    AnalysisTypeDescriptor::new(
        "transport_analysis",
        "Bloom Transport Analysis",
        "How blooms move from Gulf into Tampa Bay",
        "Analyze bloom transport dynamics for Tampa Bay using the selected data sources.

Focus on:
1. How do offshore blooms enter through Egmont Channel?
2. Tidal current patterns (flood vs ebb) and bloom movement
3. Time delay from Gulf detection to Old Tampa Bay arrival
4. Wind effects on surface bloom concentration
5. Why Old Tampa Bay is susceptible to Pyrodinium bahamense
6. Critical monitoring points along the transport pathway",
    ),
    AnalysisTypeDescriptor::new(
        "weather_correlation",
        "Weather-HAB Correlation",
        "Link MacDill weather to bloom events",
        "Analyze weather-HAB correlations for Tampa Bay using the selected data sources.

Focus on:
1. MacDill AFB wind patterns and respiratory irritation events
2. Temperature anomalies preceding bloom seasons
3. Rainfall and nutrient runoff linkages
4. Hurricane impacts on bloom disruption/intensification
5. Onshore (SW-W) wind thresholds for beach advisories
6. Seasonal weather patterns and bloom timing",
    ),
    AnalysisTypeDescriptor::new(
        "long_term_trends",
        "Long-term Trend Analysis",
        "Multi-decadal patterns since 1953",
        "Analyze long-term trends in Tampa Bay (1953-2025) using the selected data sources.

Focus on:
1. Has red tide frequency actually increased, or just detection?
2. Multi-decadal cycles (AMO, El Niño influences)
3. Impact of population growth (2M+) on water quality
4. Success of nitrogen management since 1979 (90% wastewater reduction)
5. Seagrass recovery as indicator of ecosystem health
6. Climate change signals in SST and bloom timing",
    ),
    AnalysisTypeDescriptor::new(
        "custom",
        "Custom Query",
        "Define your own correlation analysis",
        "Answer the user's correlation query using the selected Tampa Bay data sources. Ground the analysis in the physical, chemical and biological processes the sources measure.",
    ),
];

//! Static factor tables of Scope 3 categories, in kg CO2e per stated unit.
//! Sources: ADEME Base Carbone, DEFRA, Exiobase (hybrid spend-based method).

use crate::table::FactorTable;

/// Spend-based factors by purchase category (per EUR)
pub static SPEND_BASED: FactorTable = FactorTable::new(
    &[
        ("it_hardware", 0.42),
        ("it_software", 0.08),
        ("cloud_services", 0.15),
        ("telecom_services", 0.12),
        ("office_supplies", 0.20),
        ("furniture", 0.30),
        ("cleaning_services", 0.15),
        ("security_services", 0.10),
        ("consulting", 0.12),
        ("legal_services", 0.10),
        ("accounting", 0.10),
        ("marketing", 0.18),
        ("recruitment", 0.08),
        ("catering", 0.45),
        ("food_beverages", 0.50),
        ("restaurant", 0.40),
        ("courier_services", 0.35),
        ("postal_services", 0.25),
        ("warehousing", 0.20),
        ("insurance", 0.05),
        ("banking_services", 0.04),
        ("water_services", 0.30),
        ("waste_services", 0.40),
        ("construction", 0.55),
        ("maintenance", 0.35),
    ],
    0.25,
);

/// Capital goods by asset type (per EUR)
pub static CAPITAL_GOODS: FactorTable = FactorTable::new(
    &[
        ("buildings", 0.65),
        ("vehicles", 0.45),
        ("machinery", 0.50),
        ("it_infrastructure", 0.40),
        ("office_equipment", 0.35),
        ("furniture", 0.30),
    ],
    0.45,
);

/// Well-to-tank emissions (per kWh), keyed by `{fuel}_{country}` or `{fuel}`
pub static FUEL_UPSTREAM: FactorTable = FactorTable::new(
    &[
        ("electricity_FR", 0.0117),
        ("electricity_DE", 0.0850),
        ("electricity_EU", 0.0450),
        ("natural_gas", 0.0260),
        ("diesel", 0.0580),
        ("gasoline", 0.0520),
        ("lpg", 0.0350),
        ("heating_oil", 0.0550),
    ],
    0.045,
);

/// Freight by transport mode (per tonne-km)
pub static FREIGHT: FactorTable = FactorTable::new(
    &[
        ("road_truck_articulated", 0.0810),
        ("road_truck_rigid", 0.1370),
        ("road_van", 0.2490),
        ("rail_freight", 0.0280),
        ("sea_container", 0.0160),
        ("sea_bulk", 0.0080),
        ("air_freight", 0.6020),
        ("air_freight_long", 0.4940),
        ("inland_waterway", 0.0320),
    ],
    0.1000,
);

/// Passenger transport by mode (per passenger-km)
pub static TRAVEL: FactorTable = FactorTable::new(
    &[
        ("flight_short", 0.255),
        ("flight_medium", 0.156),
        ("flight_long", 0.150),
        ("flight_average", 0.195),
        ("train_tgv", 0.00293),
        ("train_ice", 0.029),
        ("train_ter", 0.025),
        ("train_average", 0.035),
        ("car_average", 0.193),
        ("car_electric", 0.050),
        ("car_hybrid", 0.120),
        ("taxi", 0.210),
        ("bus_long", 0.089),
        ("bus_urban", 0.068),
        ("metro", 0.003),
        ("tram", 0.004),
        ("ferry", 0.115),
    ],
    0.195,
);

/// Hotel stays by category (per night)
pub static HOTEL: FactorTable = FactorTable::new(
    &[
        ("budget", 15.0),
        ("standard", 25.0),
        ("business", 35.0),
        ("luxury", 45.0),
        ("average", 25.0),
    ],
    25.0,
);

/// Waste by `{waste_type}_{treatment}` (per kg). Negative entries are avoided emissions.
pub static WASTE: FactorTable = FactorTable::new(
    &[
        ("paper_recycling", 0.021),
        ("paper_landfill", 0.880),
        ("paper_incineration", 0.040),
        ("plastic_recycling", 0.050),
        ("plastic_landfill", 0.040),
        ("plastic_incineration", 2.530),
        ("glass_recycling", 0.021),
        ("glass_landfill", 0.009),
        ("metal_recycling", 0.050),
        ("metal_landfill", 0.009),
        ("organic_composting", 0.010),
        ("organic_anaerobic", -0.040),
        ("organic_landfill", 0.580),
        ("ewaste_recycling", 0.200),
        ("mixed_landfill", 0.450),
        ("mixed_incineration", 0.350),
        ("mixed_recycling", 0.100),
    ],
    0.300,
);

/// Use phase of sold products by product type (per unit and year)
pub static PRODUCT_USE: FactorTable = FactorTable::new(
    &[
        ("laptop", 45.0),
        ("desktop", 90.0),
        ("server", 1500.0),
        ("smartphone", 5.0),
        ("printer", 50.0),
        ("appliance_small", 30.0),
        ("appliance_large", 200.0),
        ("vehicle_gasoline", 2500.0),
        ("vehicle_diesel", 2200.0),
        ("vehicle_electric", 500.0),
    ],
    50.0,
);

/// End-of-life treatment by `{product_type}_{treatment}` (per kg)
pub static END_OF_LIFE: FactorTable = FactorTable::new(
    &[
        ("electronics_recycling", 0.150),
        ("electronics_landfill", 0.500),
        ("vehicle_recycling", 0.100),
        ("vehicle_shredding", 0.200),
        ("packaging_recycling", 0.030),
        ("packaging_landfill", 0.400),
        ("textile_recycling", 0.080),
        ("textile_landfill", 0.300),
    ],
    0.250,
);

/// Investments by investment type (per EUR invested)
pub static INVESTMENTS: FactorTable = FactorTable::new(
    &[
        ("equity_general", 0.35),
        ("equity_tech", 0.15),
        ("equity_energy", 0.80),
        ("equity_finance", 0.05),
        ("equity_manufacturing", 0.55),
        ("bonds_government", 0.05),
        ("bonds_corporate", 0.25),
        ("real_estate", 0.40),
    ],
    0.30,
);

/// Upstream leased assets by asset type (per m2 and year)
pub static UPSTREAM_LEASED_AREA: FactorTable = FactorTable::new(
    &[
        ("office_space", 50.0),
        ("warehouse", 30.0),
        ("retail", 80.0),
        ("data_center", 500.0),
    ],
    50.0,
);

/// Downstream leased assets by asset type (per m2 and year)
pub static DOWNSTREAM_LEASED_AREA: FactorTable = FactorTable::new(
    &[("building", 50.0), ("vehicle", 200.0), ("equipment", 100.0)],
    50.0,
);

/// Annual emissions of a franchise by franchise type (per franchise)
pub static FRANCHISES: FactorTable = FactorTable::new(
    &[
        ("restaurant", 150_000.0),
        ("retail_small", 50_000.0),
        ("retail_large", 200_000.0),
        ("hotel", 500_000.0),
    ],
    100_000.0,
);

/// Logistics or travel spend without physical data (per EUR)
pub const SPEND_FALLBACK: f64 = 0.30;
/// Leased asset energy without a factor (per kWh)
pub const LEASED_ENERGY_DEFAULT: f64 = 0.4;
/// Leased asset without energy nor area (per unit)
pub const LEASED_QUANTITY_DEFAULT: f64 = 0.25;
/// Processing of sold products (per unit)
pub const PROCESSING_DEFAULT: f64 = 0.50;
/// Average price of a flight ticket (EUR per km)
pub const FLIGHT_PRICE_PER_KM: f64 = 0.12;

pub const KM_PER_MILE: f64 = 1.60934;
pub const KG_PER_TONNE: f64 = 1000.0;

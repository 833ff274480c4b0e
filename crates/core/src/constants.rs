/// Missions generated per month of a goal's period.
pub const MISSIONS_PER_MONTH: u32 = 4;

/// Longest goal period accepted at creation, in months.
pub const MAX_GOAL_PERIOD_MONTHS: u32 = 60;

/// Number of entries in the weekly mission catalog. Slot 0 is the
/// interpolated "save this week" mission, the rest are [`STATIC_MISSIONS`].
pub const MISSION_CATALOG_SIZE: usize = STATIC_MISSIONS.len() + 1;

/// Catalog slots 1.. in order.
pub const STATIC_MISSIONS: [&str; 11] = [
    "Keep a spending log and analyze your spending patterns",
    "Cancel subscriptions you no longer use",
    "Cook at home instead of eating out (3+ times this week)",
    "Write a list of essentials before you go shopping",
    "Sell things you no longer use second-hand",
    "Use discount coupons and reward points",
    "Buy store-brand products instead of name brands",
    "Bring a tumbler instead of buying coffee out",
    "Take public transport to cut travel costs",
    "Save energy to lower your utility bills",
    "Enjoy free cultural facilities",
];

/// Milliseconds in one day, used by the countdown.
pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

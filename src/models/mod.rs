pub mod symbol;
pub mod user;

pub use symbol::{CategoryInfo, Symbol, SymbolCategory, SymbolText};
pub use user::{
    FavoriteSymbol, FontSize, Language, PreferencesUpdate, RecentlyUsedSymbol, UserData,
    UserPreferences, MAX_RECENTLY_USED,
};

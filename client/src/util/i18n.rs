//! User-facing Norwegian (nb) strings shared across views and errors.

pub const LOADING: &str = "Laster...";
pub const LOADING_RESULTS: &str = "Laster resultater...";

pub const GENERIC_FAILURE: &str = "En feil oppstod";
pub const NETWORK_FAILED: &str = "Kunne ikke kontakte tjenesten. Prøv igjen.";
pub const AUTH_FAILED: &str = "Innloggingen mislyktes";
pub const NOT_FOUND: &str = "Fant ikke det du lette etter";
pub const ALREADY_EXISTS: &str = "Dette finnes allerede";
pub const NOT_SIGNED_IN: &str = "Du er ikke logget inn";

pub const USER_NOT_FOUND: &str = "Bruker ikke funnet";
pub const ALREADY_MEMBER: &str = "Brukeren er allerede medlem av dette selskapet";
pub const ALREADY_SHARED: &str = "Testen er allerede delt med denne brukeren";
pub const NO_COMPANY_CREATED: &str = "Selskapet ble ikke opprettet";
pub const SHARED_OK: &str = "Testen er delt!";

pub const CONFIRM_PENDING: &str = "Bekrefter e-posten din...";
pub const CONFIRM_OK: &str = "E-post bekreftet! Du kan nå lukke dette vinduet og logge inn.";
pub const CONFIRM_NO_SESSION: &str = "Kunne ikke bekrefte e-post. Vennligst prøv å logge inn.";
pub const CONFIRM_INVALID_LINK: &str = "Ugyldig bekreftelseslenke.";
pub const CONFIRM_FAILED: &str = "En feil oppstod under bekreftelsen.";

pub const NO_RESULTS: &str = "Ingen resultater ennå";

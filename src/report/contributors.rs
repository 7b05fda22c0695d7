//! Display names of known contributors and their Launchpad handles.

const HANDLES: &[(&str, &str)] = &[
    ("Timo Aaltonen", "tjaalton"),
    ("Iain Lane", "laney"),
    ("Sebastien Bacher", "seb128"),
    ("James Henstridge", "jamesh"),
    ("Daniel van Vugt", "vanvugt"),
    ("Till Kamppeter", "till-kamppeter"),
    ("Marco Trevisan (Treviño)", "3v1n0"),
    ("Jean-Baptiste Lallement", "jibel"),
    ("Alberto Milone", "tseliot"),
    ("Ken VanDine", "kenvandine"),
    ("Robert Ancell", "robert.ancell"),
    ("Didier Roche", "didrocks"),
    ("Olivier Tilloy", "oSoMoN"),
    ("Marcus Tomlinson", "marcustomlinson"),
    ("Martin Wimpress", "wimpress"),
    ("Heather Ellsworth", "hellsworth"),
    ("Patrick Wu", "callmepk"),
];

/// Launchpad handle for a tracker display name, if the person is known.
#[must_use]
pub fn handle_for(display_name: &str) -> Option<&'static str> {
    HANDLES.iter().find(|(name, _)| *name == display_name).map(|(_, handle)| *handle)
}

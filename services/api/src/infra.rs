use himyatra::occupancy::RoomStatus;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// A `<room type>:<room number>` pair naming one room to toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RoomToggle {
    pub(crate) room_type: String,
    pub(crate) number: u32,
}

/// A `<name>:<room count>` pair describing a room type to add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RoomTypeSpec {
    pub(crate) name: String,
    pub(crate) total: u32,
}

pub(crate) fn parse_room_status(raw: &str) -> Result<RoomStatus, String> {
    RoomStatus::parse(raw).ok_or_else(|| {
        format!("unknown room status '{raw}' (expected vacant, occupied, maintenance, or cleaning)")
    })
}

pub(crate) fn parse_room_toggle(raw: &str) -> Result<RoomToggle, String> {
    let (room_type, number) = split_named_number(raw, "room number")?;
    Ok(RoomToggle { room_type, number })
}

pub(crate) fn parse_room_type_spec(raw: &str) -> Result<RoomTypeSpec, String> {
    let (name, total) = split_named_number(raw, "room count")?;
    Ok(RoomTypeSpec { name, total })
}

// Splits on the last ':' so names may contain spaces and colons.
fn split_named_number(raw: &str, what: &str) -> Result<(String, u32), String> {
    let (name, number) = raw
        .rsplit_once(':')
        .ok_or_else(|| format!("expected <room type>:<{what}>, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing room type in '{raw}'"));
    }
    let number = number
        .trim()
        .parse::<u32>()
        .map_err(|err| format!("invalid {what} in '{raw}' ({err})"))?;

    Ok((name.to_string(), number))
}

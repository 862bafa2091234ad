mod dialect;
mod properties;
mod snapshots;

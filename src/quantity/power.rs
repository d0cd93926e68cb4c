quantity!(Megawatts, suffix: "MW", precision: 2);

impl Megawatts {
    /// Negative power charges the battery.
    pub const fn is_charging(self) -> bool {
        self.0 < 0.0
    }
}

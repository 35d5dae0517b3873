use heapless::Vec;

/// An identifier for a button channel within a poller.
///
/// Channels are numbered in the order their inputs were handed to the
/// poller, starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelId(pub usize);

impl From<usize> for ChannelId {
    fn from(id: usize) -> Self {
        ChannelId(id)
    }
}

impl From<ChannelId> for usize {
    fn from(id: ChannelId) -> Self {
        id.0
    }
}

/// Trigger flags collected during one poll call, one per channel.
///
/// Flags start cleared and can only be set; once a channel has triggered
/// within a call it stays triggered for the rest of that call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Triggers<const N: usize> {
    flags: [bool; N],
}

impl<const N: usize> Triggers<N> {
    /// Creates a set with every flag cleared.
    pub const fn new() -> Self {
        Self { flags: [false; N] }
    }

    /// Marks a channel as triggered. Out-of-range ids are ignored.
    pub fn set(&mut self, id: ChannelId) {
        if let Some(flag) = self.flags.get_mut(id.0) {
            *flag = true;
        }
    }

    /// Returns true if the channel triggered. Out-of-range ids never have.
    pub fn is_triggered(&self, id: ChannelId) -> bool {
        self.flags.get(id.0).copied().unwrap_or(false)
    }

    /// Returns true if any channel triggered.
    pub fn any(&self) -> bool {
        self.flags.iter().any(|&flag| flag)
    }

    /// Number of channels that triggered.
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&flag| flag).count()
    }

    /// Triggered channels in ascending order.
    pub fn fired(&self) -> Vec<ChannelId, N> {
        let mut fired = Vec::new();
        for (index, _) in self.flags.iter().enumerate().filter(|(_, flag)| **flag) {
            // Capacity equals the channel count, so this cannot overflow.
            let _ = fired.push(ChannelId(index));
        }
        fired
    }

    /// Returns the flags in channel order.
    pub fn as_array(&self) -> &[bool; N] {
        &self.flags
    }

    /// Consumes the set and returns the flags in channel order.
    pub fn into_array(self) -> [bool; N] {
        self.flags
    }
}

impl<const N: usize> Default for Triggers<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> From<Triggers<N>> for [bool; N] {
    fn from(triggers: Triggers<N>) -> Self {
        triggers.flags
    }
}

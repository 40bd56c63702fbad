use tokio::sync::mpsc;

use crate::ipc::PlatformCommand;

pub type PlatformCommandSender = mpsc::Sender<PlatformCommand>;
pub type PlatformCommandReceiver = mpsc::Receiver<PlatformCommand>;

const COMMAND_CHANNEL_CAPACITY: usize = 16;

pub fn command_channel() -> (PlatformCommandSender, PlatformCommandReceiver) {
    mpsc::channel(COMMAND_CHANNEL_CAPACITY)
}

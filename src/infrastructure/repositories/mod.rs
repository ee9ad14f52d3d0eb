pub mod entry_repository;
pub mod minimax_tts_repository;
pub mod notification_repository;
pub mod tts_repository;

pub use entry_repository::EntryRepository;
pub use minimax_tts_repository::MinimaxTtsRepository;
pub use notification_repository::{
    InMemoryNotificationRepository, NotificationRepository, PersistentNotification,
};
pub use tts_repository::TtsRepository;

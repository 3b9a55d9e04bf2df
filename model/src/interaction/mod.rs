mod component;
pub use component::ComponentType;

mod interaction;
pub use interaction::{
    Interaction, InteractionType, MessageComponentInteraction, MessageComponentInteractionData,
    PingInteraction,
};

mod modal;
pub use modal::{ModalActionRow, ModalComponentData, ModalInteraction, ModalInteractionData};

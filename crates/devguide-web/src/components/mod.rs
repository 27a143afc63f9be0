mod command_step;
mod copy_button;
mod section;

pub use command_step::CommandStep;
pub use copy_button::CopyButton;
pub use section::Section;

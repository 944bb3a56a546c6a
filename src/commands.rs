use anyhow::Result;
use teloxide::{prelude::*, utils::command::BotCommands};

use crate::db::Database;
use crate::faq::DefaultFaq;
use crate::handlers::{
    greet, help, reset_session, send_example, show_faq, show_image, show_system_info,
};

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Dostępne komendy:")]
pub enum Command {
    #[command(description = "rozpocznij rozmowę z asystentem.")]
    Start,
    #[command(description = "pokaż pomoc.")]
    Help,
    #[command(description = "pokaż podgląd załadowanego FAQ.")]
    Faq,
    #[command(description = "pokaż opis ostatniego zdjęcia.")]
    Image,
    #[command(description = "wyślij przykładowy plik FAQ.")]
    Example,
    #[command(description = "wyczyść rozmowę, FAQ i zdjęcie.")]
    Reset,
    #[command(description = "pokaż informacje o wersji.")]
    Info,
}

impl Command {
    pub async fn dispatch(
        self,
        bot: Bot,
        msg: Message,
        db: Database,
        default_faq: DefaultFaq,
    ) -> Result<()> {
        match self {
            Command::Start => greet(bot, msg).await?,
            Command::Help => help(bot, msg).await?,
            Command::Faq => show_faq(bot, msg, db, default_faq).await?,
            Command::Image => show_image(bot, msg, db).await?,
            Command::Example => send_example(bot, msg).await?,
            Command::Reset => reset_session(bot, msg, db).await?,
            Command::Info => show_system_info(bot, msg).await?,
        }
        Ok(())
    }
}

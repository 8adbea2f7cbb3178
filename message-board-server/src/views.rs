use document_store::MessageRecord;
use minijinja::{context, Environment};

/// HTML pages. Templates are compiled into the binary and auto-escaped.
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("home.html", include_str!("../templates/home.html"))?;
        env.add_template("handle_message.html", include_str!("../templates/handle_message.html"))?;
        Ok(Self { env })
    }

    pub fn home(&self, messages: &[MessageRecord]) -> Result<String, minijinja::Error> {
        self.env.get_template("home.html")?.render(context! { messages => messages })
    }

    pub fn confirmation(&self, message: &str) -> Result<String, minijinja::Error> {
        self.env.get_template("handle_message.html")?.render(context! { message => message })
    }
}

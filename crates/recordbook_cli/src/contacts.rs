//! Numbered console menu over the contact service.
//!
//! # Invariants
//! - Field prompts repeat until the answer passes the same rules the store
//!   enforces, so writes from this menu never fail validation.
//! - Store failures are logged and reported; the menu keeps running.
//! - End of input leaves the menu cleanly.

use crate::console::Console;
use log::{error, info};
use recordbook_core::model::contact::is_valid_email;
use recordbook_core::{Contact, ContactRepository, ContactService, RecordId, RepoError};
use std::io::{self, BufRead, Write};

const MENU: &str = "\nMenu:\n\
1. Contact list\n\
2. Get contact by ID\n\
3. Create new contact\n\
4. Update contact\n\
5. Delete contact\n\
6. Exit";
const RULE: &str =
    "-----------------------------------------------------------------------";

enum Flow {
    Continue,
    Exit,
}

pub struct ContactMenu<'a, R: ContactRepository, I, O> {
    service: &'a ContactService<R>,
    console: Console<I, O>,
}

impl<'a, R: ContactRepository, I: BufRead, O: Write> ContactMenu<'a, R, I, O> {
    pub fn new(service: &'a ContactService<R>, console: Console<I, O>) -> Self {
        Self { service, console }
    }

    /// Runs until option 6 or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.console.say(MENU)?;
            let Some(option) = self.console.ask("Please select option: ")? else {
                return Ok(());
            };
            let flow = match option.as_str() {
                "1" => self.show_list().map(|_| Flow::Continue),
                "2" => self.show_one(),
                "3" => self.create(),
                "4" => self.update(),
                "5" => self.delete(),
                "6" => {
                    self.console.say("Leaving the program...")?;
                    Ok(Flow::Exit)
                }
                _ => {
                    self.console
                        .say("Invalid option, please select a valid option")?;
                    Ok(Flow::Continue)
                }
            }?;
            if let Flow::Exit = flow {
                return Ok(());
            }
        }
    }

    fn show_list(&mut self) -> io::Result<()> {
        let contacts = match self.service.list_contacts() {
            Ok(contacts) => contacts,
            Err(err) => return self.report(&err, "list"),
        };
        self.console.say("\n Contact List")?;
        self.console.say(RULE)?;
        if contacts.is_empty() {
            self.console.say("No contacts yet.")?;
        }
        for contact in &contacts {
            self.console.say(contact)?;
        }
        self.console.say(RULE)
    }

    fn show_one(&mut self) -> io::Result<Flow> {
        let Some(id) = self.ask_id("Enter the contact ID: ")? else {
            return Ok(Flow::Exit);
        };
        match self.service.get_contact(id) {
            Ok(contact) => {
                self.console.say("\n Contact")?;
                self.console.say(RULE)?;
                self.console.say(&contact)?;
                self.console.say(RULE)?;
            }
            Err(err) => self.report(&err, "get")?,
        }
        Ok(Flow::Continue)
    }

    fn create(&mut self) -> io::Result<Flow> {
        let Some(contact) = self.ask_fields(None)? else {
            return Ok(Flow::Exit);
        };
        match self.service.create_contact(contact) {
            Ok(created) => {
                info!("event=contact_create module=cli status=ok id={}", created.id);
                self.console.say("New contact added")?;
                self.show_list()?;
            }
            Err(err) => self.report(&err, "create")?,
        }
        Ok(Flow::Continue)
    }

    fn update(&mut self) -> io::Result<Flow> {
        let Some(id) = self.ask_id("Enter the contact ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(contact) = self.ask_fields(Some(id))? else {
            return Ok(Flow::Exit);
        };
        match self.service.update_contact(&contact) {
            Ok(()) => {
                info!("event=contact_update module=cli status=ok id={id}");
                self.console.say("Contact updated")?;
                self.show_list()?;
            }
            Err(err) => self.report(&err, "update")?,
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> io::Result<Flow> {
        let Some(id) = self.ask_id("Enter the contact ID to delete: ")? else {
            return Ok(Flow::Exit);
        };
        match self.service.delete_contact(id) {
            Ok(Some(_)) => {
                info!("event=contact_delete module=cli status=ok id={id}");
                self.console.say("Contact deleted")?;
                self.show_list()?;
            }
            Ok(None) => self.console.say("Contact not found")?,
            Err(err) => self.report(&err, "delete")?,
        }
        Ok(Flow::Continue)
    }

    fn ask_id(&mut self, prompt: &str) -> io::Result<Option<RecordId>> {
        self.console.ask_until(prompt, |raw| match raw.parse::<RecordId>() {
            Ok(id) if id > 0 => Ok(id),
            Ok(_) => Err("Contact ID must be a positive number."),
            Err(_) => Err("Invalid input. Please enter a valid number for the contact ID."),
        })
    }

    fn ask_fields(&mut self, id: Option<RecordId>) -> io::Result<Option<Contact>> {
        let Some(name) = self.console.ask_until("Enter contact name: ", |raw| {
            if raw.is_empty() {
                Err("Name cannot be empty. Please enter a valid name.")
            } else {
                Ok(raw.to_string())
            }
        })?
        else {
            return Ok(None);
        };
        let Some(email) = self.console.ask_until("Enter contact email: ", |raw| {
            if raw.is_empty() {
                Err("Email cannot be empty. Please enter a valid email.")
            } else if !is_valid_email(raw) {
                Err("Invalid email format. Please enter a valid email.")
            } else {
                Ok(raw.to_string())
            }
        })?
        else {
            return Ok(None);
        };
        let Some(phone) = self.console.ask_until("Enter contact phone: ", |raw| {
            if raw.is_empty() {
                Err("Phone number cannot be empty. Please enter a valid phone number.")
            } else {
                Ok(raw.to_string())
            }
        })?
        else {
            return Ok(None);
        };

        let mut contact = Contact::new(name, Some(email), phone);
        if let Some(id) = id {
            contact.id = id;
        }
        Ok(Some(contact))
    }

    fn report(&mut self, err: &RepoError, op: &str) -> io::Result<()> {
        if err.is_not_found() {
            return self.console.say("Contact not found");
        }
        error!("event=contact_{op} module=cli status=error error={err}");
        self.console.say("Operation failed, see the log for details.")
    }

    #[cfg(test)]
    fn into_console(self) -> Console<I, O> {
        self.console
    }
}

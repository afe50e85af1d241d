//! Maps typed console commands onto recipe list events.

use presentation::RecipeListEvent;
use shared::FoodCategory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(RecipeListEvent),
    PrintState,
    Help,
    Quit,
}

pub const HELP: &str = "commands: load | search | next | category <name> | query <text> | dismiss | state | help | quit";

pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map(|(word, rest)| (word, rest.trim()))
        .unwrap_or((line, ""));

    let command = match word.to_ascii_lowercase().as_str() {
        "load" => Command::Dispatch(RecipeListEvent::LoadRecipes),
        "search" => Command::Dispatch(RecipeListEvent::NewSearch),
        "next" => Command::Dispatch(RecipeListEvent::NextPage),
        "query" => Command::Dispatch(RecipeListEvent::UpdateQuery(rest.to_string())),
        "dismiss" => Command::Dispatch(RecipeListEvent::RemoveHeadMessage),
        "category" => match rest.parse::<FoodCategory>() {
            Ok(category) => Command::Dispatch(RecipeListEvent::SelectCategory(category)),
            Err(_) => Command::Dispatch(RecipeListEvent::Unknown(line.to_string())),
        },
        "state" => Command::PrintState,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Dispatch(RecipeListEvent::Unknown(word.to_string())),
    };
    Some(command)
}

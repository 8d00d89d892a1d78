use chatopts::{ChoiceSet, ChoiceableOption, StringOption};

#[derive(ChoiceSet)]
pub enum Mode {
    Easy,
    #[choice(name = "Nightmare", value = "hard")]
    Hard,
}

fn main() {
    let option = StringOption::new().with_choice_set::<Mode>().unwrap();
    assert_eq!(option.choices().len(), 2);
}

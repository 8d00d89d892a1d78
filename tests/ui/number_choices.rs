use chatopts::{ChoiceSet, ChoiceableOption, NumberOption};

#[derive(ChoiceSet)]
enum Stake {
    #[choice(name = "Low", value = 10)]
    Low,
    #[choice(value = 100)]
    High,
}

fn main() {
    let option = NumberOption::new().with_choice_set::<Stake>().unwrap();
    assert!(matches!(Stake::from_value(&100), Some(Stake::High)));
    assert_eq!(option.choices()[0].value, 10);
}

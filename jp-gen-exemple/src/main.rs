use jp_gen_core::model::language::Language;
use jp_gen_core::model::phonology_model::WordClass;
use jp_gen_core::model::syntax_model::ParticleRole;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // A session owns the phonology, morphology, and syntax models plus the
    // vocabulary store; dropping the session is the only way it is cleared
    let mut language = Language::new();

    // The configuration a frontend would show in its info panels
    println!("Consonants: {}", language.get_phonology().get_consonants().join(", "));
    println!("Vowels: {}", language.get_phonology().get_vowels().join(", "));
    println!("Word order: {}", language.get_syntax().get_word_order());
    for role in ParticleRole::ALL {
        println!("{} particles: {}", role, language.get_syntax().get_particles(role).join("/"));
    }
    println!("Rules:");
    for rule in language.get_morphology().rules() {
        println!("- {}: {} ({})", rule.meaning, rule.marker, rule.kind);
    }

    // Sampling an empty class is the one failure mode of the store; the
    // sentence operations seed fallback words first and never hit it
    match language.get_vocabulary().sample(WordClass::Adjective) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("No adjectives recorded yet"),
    }

    // Generate one vocabulary batch (noun, verb, noun, adjective, noun)
    log::info!("generating vocabulary");
    println!("\nNew vocabulary:");
    for (i, (class, word)) in language.generate_vocabulary().iter().enumerate() {
        println!("{}. {} ({})", i + 1, word, class);
    }

    // Morphology showcase: one before/after pair per populated class
    log::info!("applying morphology rules");
    println!("\nMorphology:");
    for example in language.show_morphology() {
        let meaning = match language.get_morphology().get_rule(&example.rule_name) {
            Some(rule) => rule.meaning.as_str(),
            None => "unknown",
        };
        println!(
            "{} {} ({}): {} -> {}",
            example.word_class, example.rule_name, meaning, example.base, example.derived
        );
    }

    // An unknown rule name is a silent no-op, not an error
    let unchanged = language.get_morphology().apply("neko", "honorific");
    println!("Unknown rule keeps the word unchanged: {}", unchanged);

    // Generate a handful of SOV sentences from the recorded vocabulary
    log::info!("generating sentences");
    println!("\nSentences:");
    for (i, sentence) in language.generate_sentences(5)?.iter().enumerate() {
        println!("{}. {}", i + 1, sentence);
    }

    // Full-language summary: configuration, rules, counts, sample sentences
    println!("\n{}", language.final_showcase()?);

    Ok(())
}

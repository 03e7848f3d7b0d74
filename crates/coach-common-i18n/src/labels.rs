// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Display labels for the exercise library filters and badges.

use crate::locale::Lang;

/// A muscle-group filter option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuscleGroup {
	/// Filter key; matched against an exercise's category. `all` disables
	/// the filter.
	pub value: &'static str,
	en: &'static str,
	fr: &'static str,
	ar: &'static str,
}

impl MuscleGroup {
	pub fn label(&self, lang: Lang) -> &'static str {
		match lang {
			Lang::En => self.en,
			Lang::Fr => self.fr,
			Lang::Ar => self.ar,
		}
	}
}

const MUSCLE_GROUPS: &[MuscleGroup] = &[
	MuscleGroup { value: "all", en: "All", fr: "Tous", ar: "الكل" },
	MuscleGroup { value: "chest", en: "Chest", fr: "Pectoraux", ar: "الصدر" },
	MuscleGroup { value: "back", en: "Back", fr: "Dos", ar: "الظهر" },
	MuscleGroup { value: "legs", en: "Legs", fr: "Jambes", ar: "الفخذين" },
	MuscleGroup { value: "shoulders", en: "Shoulders", fr: "Épaules", ar: "الكتفين" },
	MuscleGroup { value: "abs", en: "Abs", fr: "Abdominaux", ar: "البطن" },
	MuscleGroup { value: "arms", en: "Arms", fr: "Bras", ar: "الذراعين" },
	MuscleGroup { value: "buttocks", en: "Buttocks", fr: "Fessiers", ar: "الألوية" },
	MuscleGroup { value: "cardio", en: "Cardio", fr: "Cardio", ar: "الكارديو" },
	MuscleGroup { value: "stretches", en: "Stretches", fr: "Étirements", ar: "التمديدات" },
];

/// Muscle-group filter options, `all` first.
pub fn muscle_groups() -> &'static [MuscleGroup] {
	MUSCLE_GROUPS
}

/// Label for a difficulty level. Anything other than `beginner` or
/// `intermediate` is shown as advanced.
pub fn difficulty_label(level: &str, lang: Lang) -> &'static str {
	match (level, lang) {
		("beginner", Lang::En) => "Beginner",
		("beginner", Lang::Fr) => "Débutant",
		("beginner", Lang::Ar) => "مبتدئ",
		("intermediate", Lang::En) => "Intermediate",
		("intermediate", Lang::Fr) => "Intermédiaire",
		("intermediate", Lang::Ar) => "متوسط",
		(_, Lang::En) => "Advanced",
		(_, Lang::Fr) => "Avancé",
		(_, Lang::Ar) => "متقدم",
	}
}

/// Label for an equipment value. Unknown equipment is shown as sent.
pub fn equipment_label(equipment: &str, lang: Lang) -> String {
	let key = equipment.to_ascii_lowercase();
	let label = match (key.as_str(), lang) {
		("bodyweight", Lang::En) => "Bodyweight",
		("bodyweight", Lang::Fr) => "Poids de corps",
		("bodyweight", Lang::Ar) => "بوزن الجسم",
		("barbell", Lang::En) => "Barbell",
		("barbell", Lang::Fr) => "Barre",
		("barbell", Lang::Ar) => "البار",
		("dumbbell", Lang::En) => "Dumbbell",
		("dumbbell", Lang::Fr) => "Haltère",
		("dumbbell", Lang::Ar) => "دمبل",
		("machine", Lang::En | Lang::Fr) => "Machine",
		("machine", Lang::Ar) => "آلة",
		("cable", Lang::En) => "Cable",
		("cable", Lang::Fr) => "Câble",
		("cable", Lang::Ar) => "كابل",
		_ => return equipment.to_string(),
	};
	label.to_string()
}

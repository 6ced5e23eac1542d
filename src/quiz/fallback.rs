use super::{Language, RawQuestion};

// (question, options, correct index, fun fact)
type Entry = (&'static str, [&'static str; 4], usize, &'static str);

const ENGLISH: [Entry; 10] = [
    ("Which city is one of the oldest continuously inhabited cities?", ["Cairo", "Damascus", "Baghdad", "Jerusalem"], 1, "Damascus has been inhabited for over 11,000 years!"),
    ("What is the main ingredient in hummus?", ["Lentils", "Chickpeas", "Beans", "Peas"], 1, "Hummus means \"chickpeas\" in Arabic!"),
    ("Which sweet is made with layers of filo and honey?", ["Kunafa", "Baklava", "Maamoul", "Basbousa"], 1, "Baklava is served during celebrations!"),
    ("What spice blend is common in Middle Eastern cooking?", ["Curry", "Zaatar", "Garam Masala", "Herbs de Provence"], 1, "Zaatar contains thyme, sesame, sumac, and salt!"),
    ("What is traditional Arab coffee called?", ["Espresso", "Qahwa", "Cappuccino", "Latte"], 1, "Qahwa is flavored with cardamom!"),
    ("Falafel originated in which region?", ["South Asia", "Middle East", "Europe", "Africa"], 1, "Falafel is believed to have originated in Egypt!"),
    ("What grain is used to make tabbouleh?", ["Rice", "Bulgur", "Couscous", "Quinoa"], 1, "Tabbouleh is a Levantine vegetarian salad!"),
    ("Shawarma is typically served in what?", ["Bowl", "Pita bread", "Tortilla", "Rice paper"], 1, "Shawarma means \"turning\" in Arabic!"),
    ("What is the main ingredient in baba ganoush?", ["Tomatoes", "Eggplant", "Zucchini", "Peppers"], 1, "Baba ganoush means \"pampered papa\" in Arabic!"),
    ("Which spice gives many Middle Eastern dishes their yellow color?", ["Paprika", "Turmeric", "Cinnamon", "Cumin"], 1, "Turmeric has been used for thousands of years!"),
];

const ARABIC: [Entry; 10] = [
    ("ما هي المدينة من أقدم المدن المأهولة باستمرار؟", ["القاهرة", "دمشق", "بغداد", "القدس"], 1, "دمشق مأهولة منذ أكثر من 11,000 عام!"),
    ("ما هو المكون الرئيسي في الحمص؟", ["العدس", "الحمص", "الفول", "البازلاء"], 1, "الحمص يؤكل منذ آلاف السنين!"),
    ("ما هي الحلوى المصنوعة من الفيلو والعسل؟", ["الكنافة", "البقلاوة", "المعمول", "البسبوسة"], 1, "البقلاوة تقدم في الاحتفالات!"),
    ("ما مزيج التوابل الشائع في الشرق الأوسط؟", ["الكاري", "الزعتر", "غارام ماسالا", "أعشاب"], 1, "الزعتر يحتوي على السمسم والسماق!"),
    ("ما اسم القهوة العربية؟", ["إسبريسو", "قهوة", "كابتشينو", "لاتيه"], 1, "القهوة العربية بنكهة الهيل!"),
    ("من أي منطقة نشأ الفلافل؟", ["جنوب آسيا", "الشرق الأوسط", "أوروبا", "أفريقيا"], 1, "يُعتقد أن الفلافل نشأ في مصر!"),
    ("ما الحبوب المستخدمة في التبولة؟", ["الأرز", "البرغل", "الكسكس", "الكينوا"], 1, "التبولة سلطة نباتية شامية!"),
    ("الشاورما تُقدم عادة في ماذا؟", ["وعاء", "خبز البيتا", "التورتيلا", "ورق الأرز"], 1, "شاورما تعني \"الدوران\" بالعربية!"),
    ("ما المكون الرئيسي في بابا غنوج؟", ["الطماطم", "الباذنجان", "الكوسا", "الفلفل"], 1, "بابا غنوج يعني \"الأب المدلل\"!"),
    ("أي بهار يعطي اللون الأصفر للأطباق؟", ["البابريكا", "الكركم", "القرفة", "الكمون"], 1, "الكركم يُستخدم منذ آلاف السنين!"),
];

/// Hand-written batch served when generation fails.
pub fn get_fallback(language: Language) -> Vec<RawQuestion> {
    let entries = match language {
        Language::En => &ENGLISH,
        Language::Ar => &ARABIC,
    };

    entries
        .iter()
        .enumerate()
        .map(|(i, (question, options, correct_index, fun_fact))| RawQuestion {
            id: format!("f{}", i + 1),
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_index: *correct_index,
            fun_fact: Some(fun_fact.to_string()),
        })
        .collect()
}

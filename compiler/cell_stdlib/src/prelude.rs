//! Library functions written in Cell itself, evaluated in order at startup.

/// Pairs are closures that hand both halves to a selector.
const PAIRS: &str = "
pair = {:(a, b) {:(fn) fn(a, b);};};
first = {:(p) p({:(a, b) a;});};
second = {:(p) p({:(a, b) b;});};
";

const LOGIC: &str = "
not = {:(x) if(equals(x, 0), {1;}, {0;});};
";

/// Lists are chains of pairs ending in `None`.
const LISTS: &str = "
list0 = {None;};
list1 = {:(a) pair(a, None);};
list2 = {:(a, b) pair(a, list1(b));};
list3 = {:(a, b, c) pair(a, list2(b, c));};
append = {:(lst, item)
    if(equals(lst, None),
        {list1(item);},
        {pair(first(lst), append(second(lst), item));}
    );
};
for = {:(lst, fn)
    if(equals(lst, None),
        {None;},
        {fn(first(lst)); for(second(lst), fn);}
    );
};
";

const STRINGS: &str = "
chars_in = {:(s)
    from = {:(i)
        if(equals(i, len(s)),
            {None;},
            {pair(char_at(i, s), from(i + 1));}
        );
    };
    from(0);
};
";

/// Fragments in the order they are evaluated. Later fragments may call
/// functions defined by earlier ones.
pub const PRELUDE: &[&str] = &[PAIRS, LOGIC, LISTS, STRINGS];
